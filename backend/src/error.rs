//! Error handling for the Crop Advisor service
//!
//! Every failure a handler can hit is translated into one of these variants
//! before it reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::classifier::ClassifierError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    // External service errors
    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("Weather service returned {status}")]
    WeatherUpstream { status: StatusCode },

    // Model errors
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::WeatherServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::WeatherUpstream { status } => *status,
            AppError::Classifier(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::Validation { field, message } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: message.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: msg.clone(),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message: msg.clone(),
                field: None,
            },
            AppError::WeatherServiceUnavailable => ErrorDetail {
                code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                message: "Could not connect to weather service".to_string(),
                field: None,
            },
            AppError::WeatherUpstream { .. } => ErrorDetail {
                code: "WEATHER_UPSTREAM_ERROR".to_string(),
                message: "Error from weather service".to_string(),
                field: None,
            },
            AppError::Classifier(_) => ErrorDetail {
                code: "CLASSIFIER_ERROR".to_string(),
                message: "The crop model could not score this sample".to_string(),
                field: None,
            },
            AppError::Internal(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: "An unexpected error occurred".to_string(),
                field: None,
            },
        };

        let status = self.status();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Error: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
