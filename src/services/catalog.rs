//! In-memory listing catalog
//!
//! Holds the published listings, their reviews and the list-a-car review
//! queue. Published listings are fixed at construction; only the queue is
//! written after startup.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use crate::domain::search::{self, SearchQuery, SearchResult};
use crate::domain::{CreateListingRequest, Listing, ListingDetail, ListingSubmission, Review};

pub struct Catalog {
    listings: Vec<Listing>,
    reviews: HashMap<String, Vec<Review>>,
    submissions: RwLock<Vec<ListingSubmission>>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>, reviews: impl IntoIterator<Item = (String, Review)>) -> Self {
        let mut by_listing: HashMap<String, Vec<Review>> = HashMap::new();
        for (listing_id, review) in reviews {
            by_listing.entry(listing_id).or_default().push(review);
        }

        Self {
            listings,
            reviews: by_listing,
            submissions: RwLock::new(Vec::new()),
        }
    }

    /// Catalog preloaded with the built-in marketplace data
    pub fn seeded() -> Self {
        Self::new(super::seed::listings(), super::seed::reviews())
    }

    #[instrument(skip(self), fields(total_matched))]
    pub fn search(&self, query: &SearchQuery) -> SearchResult {
        let result = search::search(&self.listings, query);
        tracing::Span::current().record("total_matched", result.total_matched);
        debug!(
            shown = result.page.len(),
            has_more = result.has_more,
            "Search complete"
        );
        result
    }

    pub fn get(&self, id: &str) -> Option<Listing> {
        self.listings.iter().find(|l| l.id == id).cloned()
    }

    pub fn detail(&self, id: &str) -> Option<ListingDetail> {
        let listing = self.get(id)?;
        let reviews = self.reviews.get(id).cloned().unwrap_or_default();

        Some(ListingDetail {
            car_type: listing.car_type(),
            listing,
            reviews,
        })
    }

    /// Queue a new listing for review. It stays out of search until published.
    pub fn submit(&self, req: CreateListingRequest) -> ListingSubmission {
        let submission = ListingSubmission::from_request(req, Utc::now());
        info!(
            submission_id = %submission.id,
            make = %submission.make,
            model = %submission.model,
            "Listing submitted for review"
        );
        self.submissions.write().push(submission.clone());
        submission
    }

    pub fn pending_submissions(&self) -> usize {
        self.submissions.read().len()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn seeded_catalog_serves_detail_with_reviews() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 4);

        let detail = catalog.detail("1").unwrap();
        assert_eq!(detail.listing.model, "Camry");
        assert_eq!(detail.reviews.len(), 2);

        let no_reviews = catalog.detail("4").unwrap();
        assert!(no_reviews.reviews.is_empty());

        assert!(catalog.detail("missing").is_none());
    }

    #[test]
    fn seeded_search_uses_recommended_order() {
        let catalog = Catalog::seeded();
        let result = catalog.search(&SearchQuery::new(Decimal::from(200), 6));
        let ids: Vec<&str> = result.page.iter().map(|l| l.id.as_str()).collect();
        // Model 3 (5.0), Civic (4.9), Camry (4.8), X3 (4.7)
        assert_eq!(ids, vec!["3", "2", "1", "4"]);
        assert!(!result.has_more);
    }

    #[test]
    fn submissions_stay_out_of_search() {
        let catalog = Catalog::seeded();
        let req: CreateListingRequest = serde_json::from_value(serde_json::json!({
            "make": "Subaru",
            "model": "Outback",
            "year": 2019,
            "price_per_day": 40,
            "location": "Ballard"
        }))
        .unwrap();

        catalog.submit(req);
        assert_eq!(catalog.pending_submissions(), 1);
        assert_eq!(
            catalog
                .search(&SearchQuery::new(Decimal::from(200), 6))
                .total_matched,
            4
        );
    }
}
