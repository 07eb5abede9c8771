//! Crop Advisor Service
//!
//! A small backend for farmers: crop recommendations from a pretrained
//! classifier, a weather forecast proxy and a chat advisor backed by a local
//! language model.

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod state;

pub use crate::config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.config.cors.allowed_origin)?;

    Ok(routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// CORS restricted to a single origin, any method and header
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight instead of answered with a wildcard.
fn cors_layer(origin: &str) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(origin).map_err(|e| {
        AppError::Configuration(format!("Invalid CORS origin {:?}: {}", origin, e))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
