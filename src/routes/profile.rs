use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{Profile, UpdateProfileRequest};
use crate::error::{ApiError, ApiResult};

/// GET /profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> DataResponse<Profile> {
    DataResponse::new(state.profiles.current())
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<DataResponse<Profile>> {
    req.validate().map_err(ApiError::BadRequest)?;

    let profile = state.profiles.update(req);
    tracing::info!("Profile updated");

    Ok(DataResponse::new(profile))
}
