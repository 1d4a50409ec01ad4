//! Unified API error handling
//!
//! Provides consistent error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::payments::PaymentError;
use crate::domain::pricing::PricingError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payment failed: {0}")]
    PaymentFailed(String),
}

/// JSON error body. `request_id` is filled in by
/// [`crate::middleware::attach_request_id`] once the response leaves the
/// router.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PaymentFailed(_) => StatusCode::PAYMENT_REQUIRED,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::PaymentFailed(_) => "PAYMENT_FAILED",
        }
    }

    fn public_message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::PaymentFailed(msg) => msg,
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount(_) | PaymentError::UnsupportedMethod(_) => {
                Self::BadRequest(err.to_string())
            }
            PaymentError::Declined(_) => Self::PaymentFailed(err.to_string()),
        }
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "API error");

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message().to_string(),
            request_id: None,
        };

        let mut response = (self.status_code(), Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn payment_errors_map_to_http_semantics() {
        let declined: ApiError = PaymentError::Declined("card refused".into()).into();
        assert_eq!(declined.status_code(), StatusCode::PAYMENT_REQUIRED);

        let invalid: ApiError = PaymentError::InvalidAmount(Decimal::ZERO).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn pricing_overflow_is_a_bad_request() {
        let err: ApiError = PricingError::Overflow.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "price_per_day is too large");
    }

    #[test]
    fn error_body_travels_with_the_response() {
        let response = ApiError::not_found("Car 9 not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.message, "Car 9 not found");
        assert!(body.request_id.is_none());
    }
}
