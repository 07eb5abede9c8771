//! Crop recommendation results

use serde::{Deserialize, Serialize};

/// A single ranked recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPrediction {
    pub crop: String,
    /// Percentage with two decimals, e.g. `"87.50%"`
    pub confidence: String,
}

impl CropPrediction {
    /// Build a prediction from a raw class probability
    pub fn from_probability(crop: impl Into<String>, probability: f64) -> Self {
        Self {
            crop: crop.into(),
            confidence: format_confidence(probability),
        }
    }
}

/// Response body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub top_3_recommended_crops: Vec<CropPrediction>,
}

/// Render a probability in `[0, 1]` as a percentage string
///
/// Out-of-range and non-finite inputs are clamped so the result always lies
/// within `0.00%..=100.00%`.
pub fn format_confidence(probability: f64) -> String {
    let p = if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{:.2}%", p * 100.0)
}

/// Parse a confidence string back into a percentage value
pub fn parse_confidence(confidence: &str) -> Option<f64> {
    confidence.strip_suffix('%')?.trim().parse().ok()
}
