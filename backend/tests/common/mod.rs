//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use agri_advisor_backend::classifier::{self, ClassifierError, CropClassifier, SharedClassifier};
use agri_advisor_backend::{create_app, AppState, Config};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::FEATURE_COUNT;
use tower::ServiceExt;

/// Classifier that ignores its input and returns fixed probabilities
pub struct FixedClassifier {
    pub classes: Vec<String>,
    pub probabilities: Vec<f64>,
}

impl FixedClassifier {
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            classes: pairs.iter().map(|(c, _)| c.to_string()).collect(),
            probabilities: pairs.iter().map(|(_, p)| *p).collect(),
        }
    }
}

impl CropClassifier for FixedClassifier {
    fn kind(&self) -> &'static str {
        "fixed"
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, _features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, ClassifierError> {
        Ok(self.probabilities.clone())
    }
}

pub fn fixed_classifier() -> SharedClassifier {
    Arc::new(FixedClassifier::new(&[
        ("maize", 0.05),
        ("rice", 0.70),
        ("jute", 0.20),
        ("coffee", 0.04),
        ("chickpea", 0.01),
    ]))
}

/// The artifact bundled with the service
pub fn shipped_classifier() -> SharedClassifier {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/models/crop_model.json");
    classifier::load_from_path(path).expect("bundled model should load")
}

pub fn app_with(config: Config, classifier: SharedClassifier) -> Router {
    create_app(AppState::new(config, classifier)).expect("router should build")
}

pub fn app(config: Config) -> Router {
    app_with(config, fixed_classifier())
}

/// A port nothing listens on
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub fn sample_json() -> Value {
    serde_json::json!({
        "N": 90,
        "P": 42,
        "K": 43,
        "temperature": 20.8,
        "humidity": 82.0,
        "ph": 6.5,
        "rainfall": 202.9
    })
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Run one request; returns the status and raw body bytes
pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Run one request; returns the status and the body parsed as JSON
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, request).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
