//! Chat advisor proxy
//!
//! Renders the farmer's data and the latest recommendations into a fixed
//! prompt and relays it to the local language-model server.

use std::fmt::Write;

use shared::{ChatReply, ChatRequest, CropPrediction, SoilClimateSample};

use crate::external::{LlmClient, LlmError};

/// Instruction sent as the system message of every chat request
pub const AGRONOMIST_INSTRUCTION: &str = "\
You are AgriBot, an expert agricultural specialist and crop advisor AI. Your primary goal is to provide short, concise, and clear advice to a farmer.

The user will provide you with their current soil/climate data and the top 3 crop recommendations they just received. This data is your primary context.

Your instructions are:
1.  Be professional and factual. Your advice should be grounded in agricultural science.
2.  FORMAT ALL RESPONSES IN CONCISE BULLET POINTS. Do not use long paragraphs.
3.  Use the provided context. Base your answers on the user's specific input data (N, P, K, temp, etc.) and the recommended crops.
4.  Answer preset queries directly.
5.  Answer custom queries by relating them back to the provided data or general farming knowledge.
6.  Keep answers brief. Aim for 2-4 bullet points per response unless more detail is absolutely necessary.
";

/// Shown when the model server cannot be reached
pub const UNREACHABLE_MESSAGE: &str =
    "Could not connect to the chat advisor. Is the language model server running?";

/// Shown for every other proxy failure
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred in the chat proxy.";

/// Immutable prompt configuration, built once at startup
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system_instruction: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::agronomist()
    }
}

impl PromptTemplate {
    /// The concise crop-advisor persona
    pub fn agronomist() -> Self {
        Self {
            system_instruction: AGRONOMIST_INSTRUCTION.to_string(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Context block describing the farmer's data and recommendations
    pub fn render_context(
        &self,
        inputs: &SoilClimateSample,
        predictions: &[CropPrediction],
    ) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "--- START OF CONTEXT ---");
        let _ = writeln!(out, "Here is the farmer's data:");
        let _ = writeln!(out, "[Input Data]");
        if let Some(city) = inputs.location() {
            let _ = writeln!(out, "- Location: {}", city);
        }
        let _ = writeln!(out, "- Nitrogen (N): {} kg/ha", inputs.n);
        let _ = writeln!(out, "- Phosphorous (P): {} kg/ha", inputs.p);
        let _ = writeln!(out, "- Potassium (K): {} kg/ha", inputs.k);
        let _ = writeln!(out, "- Temperature: {} °C", decimal(inputs.temperature));
        let _ = writeln!(out, "- Humidity: {} %", decimal(inputs.humidity));
        let _ = writeln!(out, "- Soil pH: {}", decimal(inputs.ph));
        let _ = writeln!(out, "- Rainfall: {} mm/year", decimal(inputs.rainfall));
        let _ = writeln!(out);
        let _ = writeln!(out, "[AI Recommendations]");
        let _ = writeln!(
            out,
            "The analysis tool provided these top 3 recommendations:"
        );
        for p in predictions {
            let _ = writeln!(out, "- {} ({})", p.crop, p.confidence);
        }
        let _ = writeln!(out, "--- END OF CONTEXT ---");
        out
    }

    /// Full user message: context followed by the question
    pub fn user_prompt(&self, request: &ChatRequest) -> String {
        format!(
            "{}\n\nMy Question: {}",
            self.render_context(&request.inputs, &request.predictions),
            request.user_query
        )
    }
}

/// Floats always show a fractional part (`82.0`, `6.5`)
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Chat service
#[derive(Clone)]
pub struct ChatService {
    llm_client: LlmClient,
}

impl ChatService {
    pub fn new(llm_client: LlmClient) -> Self {
        Self { llm_client }
    }

    /// Forward the question and return the advisor's text
    pub async fn ask(&self, template: &PromptTemplate, request: &ChatRequest) -> Result<String, LlmError> {
        let payload = self
            .llm_client
            .build_request(template.system_instruction(), template.user_prompt(request));
        self.llm_client.complete(&payload).await
    }

    /// Like [`ChatService::ask`], but folds failures into an error reply
    pub async fn reply(&self, template: &PromptTemplate, request: &ChatRequest) -> ChatReply {
        match self.ask(template, request).await {
            Ok(text) => ChatReply::Response(text),
            Err(LlmError::Unreachable(e)) => {
                tracing::error!("Chat advisor unreachable: {:?}", e);
                ChatReply::Error(UNREACHABLE_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::error!("Chat proxy failed: {:?}", e);
                ChatReply::Error(UNEXPECTED_MESSAGE.to_string())
            }
        }
    }
}
