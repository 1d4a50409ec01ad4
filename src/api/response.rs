//! Standard API response types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response for single data item
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Simple message response
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for MessageResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Helper for creating responses with status codes
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
