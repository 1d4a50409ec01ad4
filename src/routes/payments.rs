use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::payments::{PaymentCapabilities, PaymentConfirmation, PaymentRequest};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;

#[derive(Serialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub payment: PaymentConfirmation,
}

/// GET /payments
pub async fn get_capabilities() -> Json<PaymentCapabilities> {
    Json(PaymentCapabilities::default())
}

/// POST /payments
pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<PaymentRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    if state.bookings.get(&req.booking_id).is_none() {
        return Err(ApiError::not_found(format!(
            "Booking {} not found",
            req.booking_id
        )));
    }

    tracing::info!(
        booking_id = %req.booking_id,
        amount = %req.amount,
        request_id = headers.request_id().unwrap_or("-"),
        "Processing payment"
    );

    let payment = state
        .payments
        .authorize(&req.booking_id, req.amount, &req.payment_method_id)
        .await?;

    Ok(Json(PaymentResponse {
        success: true,
        payment,
    }))
}
