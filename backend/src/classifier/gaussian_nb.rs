//! Gaussian naive Bayes

use serde::Deserialize;
use shared::FEATURE_COUNT;

use super::{validate_classes, ClassifierError};

/// Per-class feature means and variances with class priors
///
/// `var` already includes any smoothing applied at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct GaussianNb {
    pub classes: Vec<String>,
    pub class_prior: Vec<f64>,
    pub theta: Vec<[f64; FEATURE_COUNT]>,
    pub var: Vec<[f64; FEATURE_COUNT]>,
}

impl GaussianNb {
    pub(super) fn validate(&self) -> Result<(), ClassifierError> {
        validate_classes(&self.classes)?;
        let n = self.classes.len();
        if self.class_prior.len() != n || self.theta.len() != n || self.var.len() != n {
            return Err(ClassifierError::InvalidArtifact(format!(
                "expected {} rows in class_prior, theta and var",
                n
            )));
        }
        if self.class_prior.iter().any(|p| !(p.is_finite() && *p > 0.0)) {
            return Err(ClassifierError::InvalidArtifact(
                "class priors must be positive".to_string(),
            ));
        }
        if self.var.iter().flatten().any(|v| !(v.is_finite() && *v > 0.0)) {
            return Err(ClassifierError::InvalidArtifact(
                "variances must be positive".to_string(),
            ));
        }
        if self.theta.iter().flatten().any(|m| !m.is_finite()) {
            return Err(ClassifierError::InvalidArtifact(
                "means must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Joint log-likelihood of `x` under each class
    fn joint_log_likelihood(&self, x: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        self.class_prior
            .iter()
            .zip(self.theta.iter().zip(&self.var))
            .map(|(prior, (mean, var))| {
                let mut ll = prior.ln();
                for i in 0..FEATURE_COUNT {
                    let d = x[i] - mean[i];
                    ll -= 0.5 * (2.0 * std::f64::consts::PI * var[i]).ln();
                    ll -= 0.5 * d * d / var[i];
                }
                ll
            })
            .collect()
    }

    pub(super) fn predict_proba(&self, x: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let jll = self.joint_log_likelihood(x);
        let max = jll.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = jll.iter().map(|v| (v - max).exp()).collect();
        let sum: f64 = exp.iter().sum();
        exp.into_iter().map(|v| v / sum).collect()
    }
}
