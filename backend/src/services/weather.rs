//! Weather proxy: merge current conditions and forecast into one snapshot

use reqwest::Client;
use shared::{CurrentConditions, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
}

impl WeatherService {
    /// Create a service; without an API key every request fails fast
    pub fn new(http: Client, config: &WeatherConfig) -> Self {
        let weather_client = if config.api_key.trim().is_empty() {
            None
        } else {
            Some(WeatherClient::new(http, config))
        };
        Self { weather_client }
    }

    /// Fetch current conditions, then the forecast, for `city`
    ///
    /// Both calls must succeed; there is no partial response.
    pub async fn snapshot(&self, city: &str) -> AppResult<WeatherSnapshot> {
        let client = self
            .weather_client
            .as_ref()
            .ok_or_else(|| AppError::Configuration("Weather API key not configured".to_string()))?;

        let current = client.get_current_weather(city).await?;
        let forecast = client.get_forecast(city).await?;

        tracing::debug!(
            "Weather for {}: {} forecast intervals",
            city,
            forecast.list.len()
        );

        Ok(WeatherSnapshot {
            current: CurrentConditions {
                temp: current.main.temp,
                humidity: current.main.humidity,
            },
            forecast: forecast.list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let mut config = WeatherConfig::default();
        // Unroutable on purpose; reaching it would surface as a 503 instead.
        config.base_url = "http://127.0.0.1:1".to_string();
        let service = WeatherService::new(Client::new(), &config);

        let err = service.snapshot("Pune").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
