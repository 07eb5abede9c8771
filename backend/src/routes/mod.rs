//! Route definitions for the Crop Advisor service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/predict", post(handlers::predict_crop))
        .route("/weather-forecast", get(handlers::get_weather_forecast))
        .route("/chat", post(handlers::chat_with_bot))
}
