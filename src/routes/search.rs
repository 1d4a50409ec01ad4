//! Listing search
//!
//! `POST /search` takes the full query as JSON; `GET /cars` accepts the same
//! fields as query-string parameters. Both run through [`build_query`].

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::api::{DisplayWindow, Paginated, PaginationMeta};
use crate::app::AppState;
use crate::config::Settings;
use crate::domain::search::{SearchQuery, SortKey};
use crate::domain::{CarType, ListingSummary, Transmission};
use crate::error::{ApiError, ApiResult};

/// Request DTO for a search interaction
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchRequest {
    #[serde(default)]
    pub price_ceiling: Option<Decimal>,
    #[serde(default)]
    pub car_types: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub transmission: Option<Transmission>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub display_count: Option<usize>,
}

/// Validate a search request and fill in defaults from settings.
pub fn build_query(req: SearchRequest, settings: &Settings) -> ApiResult<(SearchQuery, DisplayWindow)> {
    let price_ceiling = req.price_ceiling.unwrap_or(settings.default_price_ceiling);
    if price_ceiling < Decimal::ZERO {
        return Err(ApiError::bad_request("price_ceiling must not be negative"));
    }

    if req.display_count == Some(0) {
        return Err(ApiError::bad_request("display_count must be at least 1"));
    }
    let window = DisplayWindow::from_requested(req.display_count, settings.search_page_increment);

    let required_car_types = req
        .car_types
        .iter()
        .map(|raw| raw.parse::<CarType>())
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let required_features = req
        .features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();

    let query = SearchQuery {
        required_car_types,
        required_features,
        transmission: req.transmission,
        sort: req.sort,
        ..SearchQuery::new(price_ceiling, window.count())
    };

    Ok((query, window))
}

/// Run a validated search against the catalog.
pub fn run_search(state: &AppState, req: SearchRequest) -> ApiResult<Paginated<ListingSummary>> {
    let (query, window) = build_query(req, &state.settings)?;

    if matches!(query.transmission, Some(Transmission::Manual)) {
        tracing::debug!("Manual transmission filter requested; no manual listings are offered");
    }

    let result = state.catalog.search(&query);
    let pagination = PaginationMeta::new(&result, window);
    let data = result.page.iter().map(ListingSummary::from).collect();

    Ok(Paginated::new(data, pagination))
}

/// POST /search
pub async fn search_cars(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> ApiResult<Paginated<ListingSummary>> {
    run_search(&state, req)
}
