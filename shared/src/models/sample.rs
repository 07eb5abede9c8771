//! Soil and climate measurements submitted by a farmer

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of features the crop classifier consumes
pub const FEATURE_COUNT: usize = 7;

/// Feature names in the order the classifier expects them
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// One soil/climate reading
///
/// `city` is carried along for the chat context only and never reaches the
/// classifier. Any well-typed value is accepted; the model scores readings
/// outside the usual agronomic ranges as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SoilClimateSample {
    /// Nitrogen (kg/ha)
    #[serde(rename = "N")]
    pub n: i64,

    /// Phosphorous (kg/ha)
    #[serde(rename = "P")]
    pub p: i64,

    /// Potassium (kg/ha)
    #[serde(rename = "K")]
    pub k: i64,

    /// Air temperature in °C
    pub temperature: f64,

    /// Relative humidity in percent
    pub humidity: f64,

    /// Soil pH
    pub ph: f64,

    /// Rainfall in mm/year
    pub rainfall: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl SoilClimateSample {
    /// Feature vector in [`FEATURE_NAMES`] order, with `city` dropped
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.n as f64,
            self.p as f64,
            self.k as f64,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// The city label, if present and non-empty, exactly as submitted
    pub fn location(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SoilClimateSample {
        SoilClimateSample {
            n: 90,
            p: 42,
            k: 43,
            temperature: 20.8,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.9,
            city: None,
        }
    }

    #[test]
    fn test_deserialize_uppercase_nutrients() {
        let json = r#"{"N":90,"P":42,"K":43,"temperature":20.8,"humidity":82.0,"ph":6.5,"rainfall":202.9}"#;
        let parsed: SoilClimateSample = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_missing_numeric_field_is_rejected() {
        let json = r#"{"N":90,"P":42,"temperature":20.8,"humidity":82.0,"ph":6.5,"rainfall":202.9}"#;
        assert!(serde_json::from_str::<SoilClimateSample>(json).is_err());
    }

    #[test]
    fn test_features_drop_city() {
        let mut s = sample();
        s.city = Some("Pune".to_string());
        assert_eq!(s.features(), [90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]);
    }

    #[test]
    fn test_location_kept_verbatim() {
        let mut s = sample();
        assert_eq!(s.location(), None);
        s.city = Some(String::new());
        assert_eq!(s.location(), None);
        s.city = Some(" Pune ".to_string());
        assert_eq!(s.location(), Some(" Pune "));
        s.city = Some("   ".to_string());
        assert_eq!(s.location(), Some("   "));
    }

    #[test]
    fn test_unusual_readings_are_accepted() {
        let mut s = sample();
        s.n = -5;
        s.temperature = 72.0;
        s.humidity = 120.0;
        s.ph = 15.0;
        s.rainfall = -1.0;
        assert!(s.validate().is_ok());
    }
}
