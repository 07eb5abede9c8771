//! HTTP handler for the chat advisor proxy

use axum::{extract::State, Json};
use shared::{ChatReply, ChatRequest};

use crate::extract::ValidatedJson;
use crate::AppState;

/// Ask the advisor a question about the supplied data
///
/// Proxy failures come back as `{"error": ...}` with a 200 status.
pub async fn chat_with_bot(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Json<ChatReply> {
    let reply = state.chat().reply(&state.prompt, &request).await;
    Json(reply)
}
