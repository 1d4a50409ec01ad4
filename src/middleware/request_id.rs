//! Request IDs: assigned on the way in, echoed on the way out, and copied
//! into error bodies so a client can quote it back.

use axum::{
    http::{HeaderMap, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::error::ErrorResponse;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Layers that set a UUID v4 id when the caller sent none, and echo it on
/// the response.
pub fn request_id_layer() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    let header_name = HeaderName::from_static(X_REQUEST_ID);

    (
        SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(header_name),
    )
}

/// Re-render `ApiError` bodies with the request id from the response
/// headers. Must sit outside [`PropagateRequestIdLayer`] so the header is
/// already there.
pub async fn attach_request_id(mut response: Response) -> Response {
    let Some(mut body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    body.request_id = response.headers().request_id().map(str::to_string);
    *response.body_mut() = Json(body).into_response().into_body();
    response
}

pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}
