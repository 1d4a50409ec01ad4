//! Listing search: filter, sort, paginate
//!
//! The engine is a pure function over a listing slice and an immutable
//! [`SearchQuery`]. Each call recomputes the whole pipeline; callers own any
//! presentation state (such as how many cards are shown) and pass it in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::car_type::CarType;
use super::listings::{Listing, Transmission};

/// Result ordering. Wire names match the sort select in the web client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Rating descending, then review count descending
    #[default]
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "price-low-high")]
    PriceAsc,
    #[serde(rename = "price-high-low")]
    PriceDesc,
    #[serde(rename = "rating-high-low")]
    RatingDesc,
    /// Listings carry no distance yet, so "nearest" orders by location name
    #[serde(rename = "distance-nearest")]
    LocationAsc,
}

/// One search interaction's filters, ordering and window size
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub price_ceiling: Decimal,
    pub required_car_types: BTreeSet<CarType>,
    pub required_features: BTreeSet<String>,
    pub transmission: Option<Transmission>,
    pub sort: SortKey,
    pub display_count: usize,
}

impl SearchQuery {
    pub fn new(price_ceiling: Decimal, display_count: usize) -> Self {
        Self {
            price_ceiling,
            required_car_types: BTreeSet::new(),
            required_features: BTreeSet::new(),
            transmission: None,
            sort: SortKey::default(),
            display_count,
        }
    }

    /// Whether `listing` passes every filter predicate of this query.
    pub fn matches(&self, listing: &Listing) -> bool {
        if listing.price_per_day > self.price_ceiling {
            return false;
        }

        if !self.required_car_types.is_empty()
            && !self.required_car_types.contains(&listing.car_type())
        {
            return false;
        }

        // AND semantics: every requested feature must be present
        if !self
            .required_features
            .iter()
            .all(|feature| listing.has_feature(feature))
        {
            return false;
        }

        // Every listing is treated as automatic; a manual filter matches nothing.
        // This ignores `listing.transmission` until real manual inventory exists.
        !matches!(self.transmission, Some(Transmission::Manual))
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub page: Vec<Listing>,
    pub total_matched: usize,
    pub has_more: bool,
}

impl SearchResult {
    pub fn remaining(&self) -> usize {
        self.total_matched - self.page.len()
    }
}

/// Run the full pipeline. The input slice is never reordered or modified.
pub fn search(listings: &[Listing], query: &SearchQuery) -> SearchResult {
    let mut matched: Vec<&Listing> = listings.iter().filter(|l| query.matches(l)).collect();

    // `sort_by` is stable: equal keys keep filter order
    matched.sort_by(|a, b| compare(query.sort, a, b));

    let total_matched = matched.len();
    let page: Vec<Listing> = matched
        .into_iter()
        .take(query.display_count)
        .cloned()
        .collect();
    let has_more = page.len() < total_matched;

    SearchResult {
        page,
        total_matched,
        has_more,
    }
}

fn compare(sort: SortKey, a: &Listing, b: &Listing) -> Ordering {
    match sort {
        SortKey::Recommended => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| b.review_count.cmp(&a.review_count)),
        SortKey::PriceAsc => a.price_per_day.cmp(&b.price_per_day),
        SortKey::PriceDesc => b.price_per_day.cmp(&a.price_per_day),
        SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
        SortKey::LocationAsc => locale_compare(&a.location, &b.location),
    }
}

/// Locale-style string ordering: case-insensitive first, then lowercase
/// before uppercase among strings that differ only in case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listings::{FuelType, Owner};
    use chrono::NaiveDate;

    fn listing(id: &str, model: &str, price: i64, rating: f64, reviews: u32) -> Listing {
        Listing {
            id: id.to_string(),
            make: "Make".to_string(),
            model: model.to_string(),
            year: 2022,
            color: "Silver".to_string(),
            location: "Seattle".to_string(),
            price_per_day: Decimal::from(price),
            features: BTreeSet::new(),
            rating,
            review_count: reviews,
            description: None,
            license_plate: None,
            image_urls: Vec::new(),
            mileage: None,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            seats: 5,
            coordinates: None,
            owner: Owner {
                id: "owner".to_string(),
                name: "Owner".to_string(),
                avatar_url: None,
                joined_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
                total_trips: 0,
                response_rate: 100,
            },
        }
    }

    fn with_features(mut l: Listing, features: &[&str]) -> Listing {
        l.features = features.iter().map(|f| f.to_string()).collect();
        l
    }

    fn with_location(mut l: Listing, location: &str) -> Listing {
        l.location = location.to_string();
        l
    }

    fn query() -> SearchQuery {
        SearchQuery::new(Decimal::from(200), 6)
    }

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.page.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn recommended_orders_by_rating_then_reviews() {
        let listings = vec![
            listing("a", "Camry", 45, 5.0, 10),
            listing("b", "Civic", 35, 5.0, 20),
            listing("c", "Accord", 85, 4.0, 1),
        ];

        let result = search(&listings, &query());
        assert_eq!(ids(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn price_sorts_both_directions() {
        let listings = vec![
            listing("a", "Camry", 45, 4.8, 24),
            listing("b", "Civic", 35, 4.9, 31),
            listing("c", "Model 3", 85, 5.0, 12),
        ];

        let mut q = query();
        q.sort = SortKey::PriceAsc;
        let asc = search(&listings, &q);
        let prices: Vec<Decimal> = asc.page.iter().map(|l| l.price_per_day).collect();
        assert_eq!(
            prices,
            vec![Decimal::from(35), Decimal::from(45), Decimal::from(85)]
        );

        q.sort = SortKey::PriceDesc;
        let desc = search(&listings, &q);
        assert_eq!(ids(&desc), vec!["c", "a", "b"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let listings = vec![
            listing("first", "Camry", 50, 4.5, 3),
            listing("second", "Civic", 50, 4.5, 3),
            listing("third", "Accord", 50, 4.5, 3),
        ];

        for sort in [
            SortKey::Recommended,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::LocationAsc,
        ] {
            let mut q = query();
            q.sort = sort;
            assert_eq!(
                ids(&search(&listings, &q)),
                vec!["first", "second", "third"],
                "sort {:?} is not stable",
                sort
            );
        }
    }

    #[test]
    fn rating_sort_ignores_review_count() {
        let listings = vec![
            listing("few", "Camry", 45, 4.7, 1),
            listing("many", "Civic", 35, 4.7, 90),
        ];
        let mut q = query();
        q.sort = SortKey::RatingDesc;
        assert_eq!(ids(&search(&listings, &q)), vec!["few", "many"]);
    }

    #[test]
    fn location_sort_is_case_insensitive() {
        let listings = vec![
            with_location(listing("q", "Camry", 45, 4.8, 1), "Queen Anne"),
            with_location(listing("b", "Civic", 45, 4.8, 1), "belltown"),
            with_location(listing("c", "X3", 45, 4.8, 1), "Capitol Hill"),
        ];
        let mut q = query();
        q.sort = SortKey::LocationAsc;
        assert_eq!(ids(&search(&listings, &q)), vec!["b", "c", "q"]);
    }

    #[test]
    fn location_sort_keeps_input_order_for_identical_names() {
        let listings = vec![
            with_location(listing("q1", "Camry", 45, 4.8, 1), "Queen Anne"),
            with_location(listing("b1", "Civic", 35, 4.9, 2), "Belltown"),
            with_location(listing("q2", "X3", 75, 4.7, 3), "Queen Anne"),
            with_location(listing("b2", "Accord", 55, 4.6, 4), "Belltown"),
            with_location(listing("b3", "Golf", 30, 4.5, 5), "belltown"),
        ];
        let mut q = query();
        q.sort = SortKey::LocationAsc;
        // "belltown" sorts ahead of its capitalised twins
        assert_eq!(
            ids(&search(&listings, &q)),
            vec!["b3", "b1", "b2", "q1", "q2"]
        );
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("ballard", "Ballard"), Ordering::Less);
        assert_eq!(locale_compare("Ballard", "ballard"), Ordering::Greater);
        assert_eq!(locale_compare("Ballard", "Ballard"), Ordering::Equal);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn feature_filter_requires_every_feature() {
        let listings = vec![
            with_features(listing("both", "Camry", 45, 4.8, 1), &["AC", "GPS", "USB"]),
            with_features(listing("ac", "Civic", 45, 4.8, 1), &["AC"]),
            with_features(listing("gps", "Accord", 45, 4.8, 1), &["GPS"]),
        ];
        let mut q = query();
        q.required_features = ["AC", "GPS"].iter().map(|f| f.to_string()).collect();

        let result = search(&listings, &q);
        assert_eq!(ids(&result), vec!["both"]);
        assert_eq!(result.total_matched, 1);
    }

    #[test]
    fn car_type_filter_uses_inferred_type() {
        let listings = vec![
            listing("sedan", "Camry", 45, 4.8, 1),
            listing("ev", "Model 3", 85, 5.0, 1),
            listing("suv", "X3", 75, 4.7, 1),
        ];
        let mut q = query();
        q.required_car_types = [CarType::Suv, CarType::Electric].into_iter().collect();

        assert_eq!(ids(&search(&listings, &q)), vec!["ev", "suv"]);
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let listings = vec![
            listing("at", "Camry", 75, 4.8, 1),
            listing("over", "Civic", 76, 4.9, 1),
        ];
        let mut q = query();
        q.price_ceiling = Decimal::from(75);
        assert_eq!(ids(&search(&listings, &q)), vec!["at"]);

        q.price_ceiling = Decimal::from(-1);
        assert_eq!(search(&listings, &q).total_matched, 0);
    }

    #[test]
    fn manual_transmission_matches_nothing() {
        let listings = vec![listing("a", "Camry", 45, 4.8, 1)];
        let mut q = query();

        q.transmission = Some(Transmission::Manual);
        let result = search(&listings, &q);
        assert!(result.page.is_empty());
        assert!(!result.has_more);

        q.transmission = Some(Transmission::Automatic);
        assert_eq!(search(&listings, &q).total_matched, 1);
    }

    #[test]
    fn every_page_entry_satisfies_filters() {
        let listings = vec![
            with_features(listing("a", "Camry", 45, 4.8, 24), &["AC", "GPS"]),
            with_features(listing("b", "Civic", 35, 4.9, 31), &["AC"]),
            with_features(listing("c", "Model 3", 85, 5.0, 12), &["Autopilot"]),
            with_features(listing("d", "X3", 75, 4.7, 18), &["AC", "GPS", "Sunroof"]),
        ];
        let mut q = query();
        q.price_ceiling = Decimal::from(80);
        q.required_features = ["AC".to_string()].into_iter().collect();

        let result = search(&listings, &q);
        assert_eq!(result.total_matched, 3);
        assert!(result.page.iter().all(|l| q.matches(l)));
    }

    #[test]
    fn page_is_prefix_of_unbounded_result() {
        let listings: Vec<Listing> = (0..15)
            .map(|i| {
                listing(
                    &i.to_string(),
                    "Camry",
                    20 + (i * 7) % 50,
                    4.0 + (i % 3) as f64 * 0.3,
                    i as u32,
                )
            })
            .collect();

        for sort in [SortKey::Recommended, SortKey::PriceAsc, SortKey::LocationAsc] {
            let mut q = query();
            q.sort = sort;
            q.display_count = usize::MAX;
            let full = search(&listings, &q);

            q.display_count = 6;
            let window = search(&listings, &q);
            assert_eq!(window.page.len(), 6);
            assert_eq!(ids(&window), ids(&full)[..6].to_vec());
            assert!(window.has_more);
            assert_eq!(window.remaining(), 9);
        }
    }

    #[test]
    fn has_more_only_when_matches_exceed_window() {
        let listings: Vec<Listing> = (0..6)
            .map(|i| listing(&i.to_string(), "Camry", 45, 4.8, i))
            .collect();

        let exact = search(&listings, &query());
        assert_eq!(exact.total_matched, 6);
        assert!(!exact.has_more);

        let mut q = query();
        q.display_count = 5;
        assert!(search(&listings, &q).has_more);
    }

    #[test]
    fn input_is_left_untouched() {
        let listings = vec![
            listing("a", "Camry", 45, 4.0, 1),
            listing("b", "Civic", 35, 5.0, 1),
        ];
        let before: Vec<String> = listings.iter().map(|l| l.id.clone()).collect();
        let _ = search(&listings, &query());
        let after: Vec<String> = listings.iter().map(|l| l.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn sort_keys_use_client_wire_names() {
        let key: SortKey = serde_json::from_str("\"price-low-high\"").unwrap();
        assert_eq!(key, SortKey::PriceAsc);
        assert_eq!(
            serde_json::to_string(&SortKey::LocationAsc).unwrap(),
            "\"distance-nearest\""
        );
    }
}
