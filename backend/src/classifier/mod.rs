//! Crop classifier loaded once at startup
//!
//! The model is a JSON artifact tagged by `kind`. Inference is a pure read
//! over immutable parameters, so one handle is shared by every request
//! without locking.

mod forest;
mod gaussian_nb;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use shared::FEATURE_COUNT;
use thiserror::Error;

pub use forest::{DecisionTree, RandomForest};
pub use gaussian_nb::GaussianNb;

/// Classifier load and inference errors
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// A multi-class probability model over soil/climate features
pub trait CropClassifier: Send + Sync {
    /// Short name of the model family, for diagnostics
    fn kind(&self) -> &'static str;

    /// Class labels in the model's native order
    fn classes(&self) -> &[String];

    /// One probability per class, aligned with [`CropClassifier::classes`]
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ClassifierError>;
}

/// Shared, immutable classifier handle
pub type SharedClassifier = Arc<dyn CropClassifier>;

/// On-disk artifact formats
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    GaussianNb(GaussianNb),
    RandomForest(RandomForest),
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ClassifierError> {
        match self {
            ModelArtifact::GaussianNb(model) => model.validate(),
            ModelArtifact::RandomForest(model) => model.validate(),
        }
    }
}

impl CropClassifier for ModelArtifact {
    fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::GaussianNb(_) => "gaussian_nb",
            ModelArtifact::RandomForest(_) => "random_forest",
        }
    }

    fn classes(&self) -> &[String] {
        match self {
            ModelArtifact::GaussianNb(model) => &model.classes,
            ModelArtifact::RandomForest(model) => &model.classes,
        }
    }

    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ClassifierError> {
        if features.iter().any(|v| !v.is_finite()) {
            return Err(ClassifierError::Inference(
                "feature vector contains non-finite values".to_string(),
            ));
        }
        match self {
            ModelArtifact::GaussianNb(model) => Ok(model.predict_proba(features)),
            ModelArtifact::RandomForest(model) => Ok(model.predict_proba(features)),
        }
    }
}

/// Load the classifier artifact from disk
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SharedClassifier, ClassifierError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let artifact = ModelArtifact::from_json(&json)?;

    tracing::info!(
        "Loaded {} classifier with {} classes from {}",
        artifact.kind(),
        artifact.classes().len(),
        path.display()
    );

    Ok(Arc::new(artifact))
}

/// Checks common to every artifact kind
fn validate_classes(classes: &[String]) -> Result<(), ClassifierError> {
    if classes.len() < 3 {
        return Err(ClassifierError::InvalidArtifact(format!(
            "at least 3 classes are required, found {}",
            classes.len()
        )));
    }
    let mut sorted: Vec<&String> = classes.iter().collect();
    sorted.sort();
    sorted.dedup();
    if sorted.len() != classes.len() {
        return Err(ClassifierError::InvalidArtifact(
            "class labels must be unique".to_string(),
        ));
    }
    Ok(())
}
