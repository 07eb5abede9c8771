//! HTTP handlers for the Crop Advisor API

pub mod chat;
pub mod health;
pub mod predict;
pub mod weather;

pub use chat::*;
pub use health::*;
pub use predict::*;
pub use weather::*;
