//! Weather proxy response shape

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Current temperature and humidity, numbers kept as the provider sent them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp: Number,
    pub humidity: Number,
}

/// Body of `GET /weather-forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    /// Raw 3-hour interval records, passed through unmodified
    pub forecast: Vec<Value>,
}
