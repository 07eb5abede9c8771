//! External API integrations

pub mod llm;
pub mod weather;

pub use llm::{LlmClient, LlmError};
pub use weather::WeatherClient;
