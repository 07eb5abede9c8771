//! Business logic services for the Crop Advisor service

pub mod chat;
pub mod predictor;
pub mod weather;

pub use chat::{ChatService, PromptTemplate};
pub use predictor::PredictorService;
pub use weather::WeatherService;
