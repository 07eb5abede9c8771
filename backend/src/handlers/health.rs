//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: ModelStatus,
}

#[derive(Serialize)]
pub struct ModelStatus {
    pub kind: String,
    pub classes: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: ModelStatus {
            kind: state.classifier.kind().to_string(),
            classes: state.classifier.classes().len(),
        },
    })
}

/// Root endpoint
pub async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}
