//! Application state shared across handlers

use std::sync::Arc;

use crate::classifier::SharedClassifier;
use crate::config::Config;
use crate::external::LlmClient;
use crate::services::{ChatService, PredictorService, PromptTemplate, WeatherService};

/// Application state shared across handlers
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: SharedClassifier,
    pub prompt: Arc<PromptTemplate>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, classifier: SharedClassifier) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            prompt: Arc::new(PromptTemplate::agronomist()),
            http: reqwest::Client::new(),
        }
    }

    pub fn predictor(&self) -> PredictorService {
        PredictorService::new(self.classifier.clone())
    }

    pub fn weather(&self) -> WeatherService {
        WeatherService::new(self.http.clone(), &self.config.weather)
    }

    pub fn chat(&self) -> ChatService {
        ChatService::new(LlmClient::new(self.http.clone(), &self.config.llm))
    }
}
