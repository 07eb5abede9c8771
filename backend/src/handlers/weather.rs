//! HTTP handler for the weather forecast proxy

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::WeatherSnapshot;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedQuery;
use crate::AppState;

/// Query parameters for `/weather-forecast`
#[derive(Debug, Deserialize, Validate)]
pub struct ForecastQuery {
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
}

/// Current conditions plus the 5-day/3-hour forecast for a city
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ForecastQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let snapshot = state.weather().snapshot(&query.city).await?;
    Ok(Json(snapshot))
}
