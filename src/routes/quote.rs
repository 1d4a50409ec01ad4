use axum::{extract::State, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::pricing::{Quote, QuoteDisplay};
use crate::error::{ApiError, ApiResult};

/// Request DTO for a price quote. The rate comes from `price_per_day`, or
/// from the listing named by `car_id` when no rate is given.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub price_per_day: Option<Decimal>,
    #[serde(default)]
    pub car_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// False until both dates are present
    pub computable: bool,
    #[serde(flatten)]
    pub quote: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<QuoteDisplay>,
}

/// POST /quote
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    let price_per_day = match (req.price_per_day, req.car_id.as_deref()) {
        (Some(rate), _) => rate,
        (None, Some(car_id)) => state
            .catalog
            .get(car_id)
            .map(|listing| listing.price_per_day)
            .ok_or_else(|| ApiError::not_found(format!("Car {} not found", car_id)))?,
        (None, None) => {
            return Err(ApiError::bad_request(
                "either price_per_day or car_id is required",
            ))
        }
    };

    if price_per_day < Decimal::ZERO {
        return Err(ApiError::bad_request("price_per_day must not be negative"));
    }

    let quote = state
        .pricing
        .quote(price_per_day, req.start_date, req.end_date)?;

    Ok(Json(QuoteResponse {
        computable: quote.is_some(),
        display: quote.as_ref().map(Quote::display),
        quote,
    }))
}
