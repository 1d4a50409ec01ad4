use axum::{http::HeaderValue, middleware::map_response, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::domain::pricing::PricingPolicy;
use crate::middleware::{attach_request_id, request_id_layer};
use crate::routes;
use crate::services::{BookingLedger, Catalog, PaymentGateway, ProfileStore};

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    pub pricing: PricingPolicy,
    pub catalog: Catalog,
    pub bookings: BookingLedger,
    pub profiles: ProfileStore,
    /// Payment processor behind the gateway interface
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// State seeded with the built-in marketplace data
    pub fn new(settings: Settings, payments: Arc<dyn PaymentGateway>) -> Arc<Self> {
        Arc::new(Self {
            pricing: PricingPolicy::from_percent(settings.service_fee_percent),
            settings,
            catalog: Catalog::seeded(),
            bookings: BookingLedger::seeded(),
            profiles: ProfileStore::seeded(),
            payments,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    // Spans at DEBUG to keep INFO output to one line per event
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();

    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(propagate_request_id)
        .layer(map_response(attach_request_id))
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static("x-request-id"),
        ]))
        .allow_credentials(true)
        .max_age(max_age)
}
