//! HTTP handler for crop recommendations

use axum::{extract::State, Json};
use shared::{PredictionResponse, SoilClimateSample};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::AppState;

/// Recommend the three most likely crops for a soil/climate sample
pub async fn predict_crop(
    State(state): State<AppState>,
    ValidatedJson(sample): ValidatedJson<SoilClimateSample>,
) -> AppResult<Json<PredictionResponse>> {
    let response = state.predictor().recommend(&sample)?;
    Ok(Json(response))
}
