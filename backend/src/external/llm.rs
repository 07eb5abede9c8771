//! Client for a local OpenAI-compatible chat-completions server

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

/// Failures talking to the language-model server
#[derive(Error, Debug)]
pub enum LlmError {
    /// Connection refused, DNS failure or timeout
    #[error("Language model server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Language model server returned {0}")]
    Status(StatusCode),

    #[error("Malformed completion response: {0}")]
    Malformed(String),

    #[error("Completion response contained no choices")]
    EmptyChoices,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request payload for `/v1/chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub stream: bool,
}

/// Response payload from `/v1/chat/completions`
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Chat-completions client
#[derive(Clone)]
pub struct LlmClient {
    http_client: Client,
    url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl LlmClient {
    /// Create a new client on top of a shared HTTP client
    pub fn new(http_client: Client, config: &LlmConfig) -> Self {
        Self {
            http_client,
            url: config.url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Build the non-streaming payload for a system + user exchange
    pub fn build_request(&self, system: &str, user: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.temperature,
            stream: false,
        }
    }

    /// Send one completion request and return the first choice's text
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LlmError> {
        let response = self
            .http_client
            .post(&self.url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(LlmError::Unreachable)?;

        if !response.status().is_success() {
            return Err(LlmError::Status(response.status()));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Malformed(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyChoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let client = LlmClient::new(Client::new(), &LlmConfig::default());
        let request = client.build_request("be brief", "hello".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "google/gemma-3-4b");
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be brief");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"- Plant rice"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "- Plant rice");
    }
}
