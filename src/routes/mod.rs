pub mod bookings;
pub mod cars;
pub mod health;
pub mod payments;
pub mod profile;
pub mod quote;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Browsing and search
        .route("/cars", get(cars::list_cars).post(cars::create_listing))
        .route("/cars/features", get(cars::get_filter_catalog))
        .route("/cars/:car_id", get(cars::get_car))
        .route("/search", post(search::search_cars))
        // Pricing and bookings
        .route("/quote", post(quote::create_quote))
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        // Payments
        .route(
            "/payments",
            get(payments::get_capabilities).post(payments::create_payment),
        )
        // Profile
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
}
