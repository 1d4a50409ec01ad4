//! Car routes
//!
//! Browsing (query-string search), the car detail page, the filter catalog
//! and list-a-car submissions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::search::{run_search, SearchRequest};
use crate::api::{Created, DataResponse, MessageResponse, Paginated};
use crate::app::AppState;
use crate::domain::search::SortKey;
use crate::domain::{
    CarType, CreateListingRequest, ListingDetail, ListingSubmission, ListingSummary, Transmission,
    KNOWN_FEATURES,
};
use crate::error::{ApiError, ApiResult};

/// Query-string form of [`SearchRequest`]; list values are comma-separated.
#[derive(Debug, Deserialize, Default)]
pub struct CarsQueryParams {
    pub max_price: Option<Decimal>,
    pub car_types: Option<String>,
    pub features: Option<String>,
    pub transmission: Option<Transmission>,
    pub sort: Option<SortKey>,
    pub display_count: Option<usize>,
}

fn split_csv(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

impl From<CarsQueryParams> for SearchRequest {
    fn from(params: CarsQueryParams) -> Self {
        Self {
            price_ceiling: params.max_price,
            car_types: split_csv(params.car_types),
            features: split_csv(params.features),
            transmission: params.transmission,
            sort: params.sort.unwrap_or_default(),
            display_count: params.display_count,
        }
    }
}

/// GET /cars
pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CarsQueryParams>,
) -> ApiResult<Paginated<ListingSummary>> {
    run_search(&state, params.into())
}

/// GET /cars/:car_id
pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(car_id): Path<String>,
) -> ApiResult<DataResponse<ListingDetail>> {
    state
        .catalog
        .detail(&car_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::not_found(format!("Car {} not found", car_id)))
}

#[derive(Debug, Serialize)]
pub struct FilterCatalog {
    pub car_types: Vec<CarType>,
    pub features: Vec<&'static str>,
    pub transmissions: Vec<Transmission>,
    pub sort_options: Vec<SortKey>,
}

/// GET /cars/features
pub async fn get_filter_catalog() -> Json<FilterCatalog> {
    Json(FilterCatalog {
        car_types: CarType::ALL.to_vec(),
        features: KNOWN_FEATURES.to_vec(),
        transmissions: vec![Transmission::Automatic, Transmission::Manual],
        sort_options: vec![
            SortKey::Recommended,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::LocationAsc,
        ],
    })
}

/// POST /cars
///
/// Accepts a listing into the review queue.
pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateListingRequest>,
) -> ApiResult<Created<MessageResponse<ListingSubmission>>> {
    req.validate(Utc::now().date_naive())
        .map_err(|problems| ApiError::bad_request(problems.join("; ")))?;

    let submission = state.catalog.submit(req);

    Ok(Created(MessageResponse::new(
        "Car listed successfully! It will be reviewed and published within 24 hours.",
        submission,
    )))
}
