//! Domain models for the Crop Advisor service

mod chat;
mod prediction;
mod sample;
mod weather;

pub use chat::*;
pub use prediction::*;
pub use sample::*;
pub use weather::*;
