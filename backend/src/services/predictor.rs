//! Top-k crop recommendation over the shared classifier

use std::cmp::Ordering;

use shared::{CropPrediction, PredictionResponse, SoilClimateSample};

use crate::classifier::{ClassifierError, SharedClassifier};
use crate::error::AppResult;

/// How many recommendations `/predict` returns
pub const TOP_K: usize = 3;

/// Predictor service
#[derive(Clone)]
pub struct PredictorService {
    classifier: SharedClassifier,
}

impl PredictorService {
    pub fn new(classifier: SharedClassifier) -> Self {
        Self { classifier }
    }

    /// Score a sample and return the three most likely crops
    pub fn recommend(&self, sample: &SoilClimateSample) -> AppResult<PredictionResponse> {
        let probabilities = self.classifier.predict_proba(&sample.features())?;
        let classes = self.classifier.classes();
        if probabilities.len() != classes.len() {
            return Err(ClassifierError::Inference(format!(
                "{} probabilities for {} classes",
                probabilities.len(),
                classes.len()
            ))
            .into());
        }

        let top = rank_top_k(classes, &probabilities, TOP_K)
            .into_iter()
            .map(|(crop, p)| CropPrediction::from_probability(crop, p))
            .collect();

        Ok(PredictionResponse {
            top_3_recommended_crops: top,
        })
    }
}

/// Pair labels with probabilities and keep the `k` highest
///
/// Ordered by probability descending; equal probabilities fall back to the
/// label in ascending order so the ranking never depends on model layout.
pub fn rank_top_k<'a>(classes: &'a [String], probabilities: &[f64], k: usize) -> Vec<(&'a str, f64)> {
    let mut pairs: Vec<(&str, f64)> = classes
        .iter()
        .map(String::as_str)
        .zip(probabilities.iter().copied())
        .collect();

    pairs.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    pairs.truncate(k);
    pairs
}
