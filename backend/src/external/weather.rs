//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap 2.5 API for current conditions and the
//! 5-day/3-hour forecast.

use axum::http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    country_code: String,
    units: String,
}

/// OpenWeatherMap API response for current weather
///
/// Only the fields the proxy forwards are decoded.
#[derive(Debug, Deserialize)]
pub struct OWMCurrentResponse {
    pub main: OWMMain,
}

#[derive(Debug, Deserialize)]
pub struct OWMMain {
    pub temp: Number,
    pub humidity: Number,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
pub struct OWMForecastResponse {
    /// 3-hour interval records, kept raw
    pub list: Vec<Value>,
}

impl WeatherClient {
    /// Create a new WeatherClient on top of a shared HTTP client
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code.clone(),
            units: config.units.clone(),
        }
    }

    /// Fetch current weather conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> AppResult<OWMCurrentResponse> {
        self.get_json("weather", city).await
    }

    /// Fetch the 5-day/3-hour forecast for a city
    pub async fn get_forecast(&self, city: &str) -> AppResult<OWMForecastResponse> {
        self.get_json("forecast", city).await
    }

    /// Query value for a city, qualified with the configured country
    pub fn location_query(&self, city: &str) -> String {
        format!("{},{}", city, self.country_code)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let location = self.location_query(city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather API request to {} failed: {:?}", endpoint, e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API {} returned {} - {}", endpoint, status, body);
            return Err(AppError::WeatherUpstream {
                status: upstream_status(status),
            });
        }

        response.json().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse weather {} response: {}", endpoint, e))
        })
    }
}

/// Provider status as a response status for our own clients
///
/// reqwest and axum depend on different `http` majors, so the code is carried
/// across as a number.
fn upstream_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_keeps_code() {
        assert_eq!(upstream_status(reqwest::StatusCode::NOT_FOUND), StatusCode::NOT_FOUND);
        assert_eq!(
            upstream_status(reqwest::StatusCode::TOO_MANY_REQUESTS),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(upstream_status(reqwest::StatusCode::UNAUTHORIZED), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_location_query_appends_country() {
        let client = WeatherClient::new(Client::new(), &WeatherConfig::default());
        assert_eq!(client.location_query("Pune"), "Pune,IN");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = WeatherConfig {
            base_url: "http://localhost:9000/data/2.5/".to_string(),
            ..WeatherConfig::default()
        };
        let client = WeatherClient::new(Client::new(), &config);
        assert_eq!(client.base_url, "http://localhost:9000/data/2.5");
    }

    #[test]
    fn test_current_response_keeps_number_form() {
        let json = r#"{"coord":{"lat":18.5,"lon":73.8},"main":{"temp":27.3,"humidity":61,"pressure":1009},"name":"Pune"}"#;
        let parsed: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.main.temp.to_string(), "27.3");
        assert_eq!(parsed.main.humidity.to_string(), "61");
    }
}
