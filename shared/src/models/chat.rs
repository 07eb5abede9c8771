//! Chat advisor request and reply shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CropPrediction, SoilClimateSample};

/// Number of predictions the chat context carries
pub const CHAT_PREDICTION_COUNT: usize = 3;

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    pub user_query: String,

    pub inputs: SoilClimateSample,

    /// Most likely first, as returned by `/predict`
    #[validate(length(equal = 3, message = "Exactly 3 predictions are required"))]
    pub predictions: Vec<CropPrediction>,
}

/// Reply of `POST /chat`
///
/// Serialized as either `{"response": ...}` or `{"error": ...}`. Both are sent
/// with a 200 status, so callers must check which key is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatReply {
    Response(String),
    Error(String),
}
