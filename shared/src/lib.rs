//! Shared types for the Crop Advisor service
//!
//! Request and response value objects exchanged between the backend and its
//! clients, together with the validation rules applied to them.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
