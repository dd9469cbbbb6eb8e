//! Route definitions for the dashboard API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Permissive CORS so any dashboard front end can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Widget catalog: dropdown options and slider configuration
        .route("/sites", get(handlers::get_site_catalog))
        // Current filter state and both chart specs
        .route("/dashboard", get(handlers::get_dashboard))
        // Filter trigger events
        .route("/events/site", post(handlers::site_changed))
        .route("/events/payload-range", post(handlers::payload_range_changed))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
