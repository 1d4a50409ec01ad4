//! "Load more" pagination for search results
//!
//! The client shows a growing window of results instead of numbered pages.
//! The window starts at one increment and grows by one increment per "load
//! more". A request without a window size is a fresh query and starts over.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::search::SearchResult;

/// Number of results currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    count: usize,
    increment: usize,
}

impl DisplayWindow {
    /// Largest window a client may request
    pub const MAX_COUNT: usize = 600;

    pub fn new(increment: usize) -> Self {
        Self {
            count: increment,
            increment,
        }
    }

    /// Window for a client-supplied count; `None` means a fresh query.
    pub fn from_requested(requested: Option<usize>, increment: usize) -> Self {
        match requested {
            Some(count) => Self {
                count: count.min(Self::MAX_COUNT),
                increment,
            },
            None => Self::new(increment),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn load_more(self) -> Self {
        Self {
            count: self.count.saturating_add(self.increment),
            ..self
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub total_matched: usize,
    pub displayed: usize,
    pub remaining: usize,
    pub has_more: bool,
    /// Window size to request for the next "load more"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_display_count: Option<usize>,
}

impl PaginationMeta {
    pub fn new(result: &SearchResult, window: DisplayWindow) -> Self {
        Self {
            total_matched: result.total_matched,
            displayed: result.page.len(),
            remaining: result.remaining(),
            has_more: result.has_more,
            next_display_count: result.has_more.then(|| window.load_more().count()),
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, pagination: PaginationMeta) -> Self {
        Self { data, pagination }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_more_adds_one_increment() {
        let window = DisplayWindow::new(6);
        assert_eq!(window.count(), 6);
        assert_eq!(window.load_more().count(), 12);
        assert_eq!(window.load_more().load_more().count(), 18);
    }

    #[test]
    fn fresh_query_starts_at_one_increment() {
        let grown = DisplayWindow::from_requested(Some(18), 6);
        assert_eq!(grown.count(), 18);
        assert_eq!(DisplayWindow::from_requested(None, 6), DisplayWindow::new(6));
    }

    #[test]
    fn requested_window_is_capped() {
        assert_eq!(DisplayWindow::from_requested(None, 6).count(), 6);
        assert_eq!(DisplayWindow::from_requested(Some(12), 6).count(), 12);
        assert_eq!(
            DisplayWindow::from_requested(Some(usize::MAX), 6).count(),
            DisplayWindow::MAX_COUNT
        );
    }

    #[test]
    fn meta_offers_next_window_only_when_more_remain() {
        let result = SearchResult {
            page: Vec::new(),
            total_matched: 0,
            has_more: false,
        };
        let meta = PaginationMeta::new(&result, DisplayWindow::new(6));
        assert_eq!(meta.next_display_count, None);
        assert_eq!(meta.remaining, 0);
    }
}
