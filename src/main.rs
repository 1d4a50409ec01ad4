mod api;
mod app;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use services::MockPaymentGateway;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting Aura backend"
    );

    // Simulated payment processor
    let payments = Arc::new(MockPaymentGateway::new(Duration::from_millis(
        settings.payment_delay_ms,
    )));

    // Create application state
    let server_addr = settings.server_addr.clone();
    let state = app::AppState::new(settings, payments);
    tracing::info!(
        listings = state.catalog.len(),
        "Marketplace catalog loaded"
    );

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&server_addr).await?;
    tracing::info!("Listening on {}", server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
