use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::{Created, DataResponse, MessageResponse};
use crate::app::AppState;
use crate::domain::{is_valid_pickup_time, Booking, BookingsOverview, CreateBookingRequest};
use crate::error::{ApiError, ApiResult};

/// GET /bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> DataResponse<BookingsOverview> {
    DataResponse::new(state.bookings.overview())
}

/// POST /bookings
///
/// Records a booking request; the owner confirms it later.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<Created<MessageResponse<Booking>>> {
    let listing = state
        .catalog
        .get(&req.car_id)
        .ok_or_else(|| ApiError::not_found(format!("Car {} not found", req.car_id)))?;

    if let Some(time) = req.pickup_time {
        if !is_valid_pickup_time(time) {
            return Err(ApiError::bad_request(
                "pickup_time must be on the hour between 09:00 and 17:00",
            ));
        }
    }

    let quote = state
        .pricing
        .quote(listing.price_per_day, req.start_date, req.end_date)?
        .ok_or_else(|| ApiError::bad_request("Please select both start and end dates"))?;

    let booking = state.bookings.request(&listing, &quote, req.pickup_time);

    tracing::info!(
        booking_id = %booking.id,
        car = %listing.title(),
        days = quote.days,
        total = %quote.total,
        "Booking requested"
    );

    Ok(Created(MessageResponse::new(
        "Booking request sent! You'll receive a confirmation email soon.",
        booking,
    )))
}
