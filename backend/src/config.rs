//! Configuration management for the Crop Advisor service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AGRI__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Cross-origin policy
    pub cors: CorsConfig,

    /// Crop classifier artifact
    pub model: ModelConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Language-model server configuration
    pub llm: LlmConfig,

    /// Log output configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// The single client origin allowed to call the API
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the JSON classifier artifact
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. Empty means unconfigured.
    pub api_key: String,

    /// Provider base URL, without trailing slash
    pub base_url: String,

    /// Country qualifier appended to every city query
    pub country_code: String,

    /// Unit system requested from the provider
    pub units: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Chat-completions endpoint of the local model server
    pub url: String,

    /// Model identifier sent in the payload
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound for one completion call
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("cors.allowed_origin", "http://localhost:3000")?
            .set_default("model.path", "models/crop_model.json")?
            .set_default("weather.api_key", "")?
            .set_default("weather.base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.country_code", "IN")?
            .set_default("weather.units", "metric")?
            .set_default("llm.url", "http://127.0.0.1:1234/v1/chat/completions")?
            .set_default("llm.model", "google/gemma-3-4b")?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.timeout_secs", 60)?
            .set_default("logging.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Whether a weather API key has been supplied
    pub fn weather_configured(&self) -> bool {
        !self.weather.api_key.trim().is_empty()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "models/crop_model.json".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            country_code: "IN".to_string(),
            units: "metric".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:1234/v1/chat/completions".to_string(),
            model: "google/gemma-3-4b".to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}
