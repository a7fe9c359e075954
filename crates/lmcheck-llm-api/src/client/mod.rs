use async_trait::async_trait;

use lmcheck_models::ChatRequest;

use crate::config::ClientConfig;
use crate::error::LlmError;

pub mod openai_compat;
pub use openai_compat::OpenAiCompatClient;

/// Token usage information
pub use lmcheck_models::Usage as TokenUsage;

/// Result of one chat completion
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// First choice's message content, exactly as the server sent it
    pub content: String,
    pub usage: Option<TokenUsage>,
    /// Model that answered, when the server reports it
    pub model: Option<String>,
    pub finish_reason: Option<String>,
}

/// LLM client trait - the two operations the tools need from a server
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Identifiers of the models the server offers, in server order
    async fn list_models(&self) -> Result<Vec<String>, LlmError>;

    /// Run one chat completion. The client keeps no history: `request`
    /// carries the whole conversation.
    async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

/// List models with a client scoped to this call
pub async fn list_models(config: &ClientConfig) -> Result<Vec<String>, LlmError> {
    OpenAiCompatClient::new(config)?.list_models().await
}

/// Run one chat completion with a client scoped to this call
pub async fn chat_complete(config: &ClientConfig, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
    OpenAiCompatClient::new(config)?.chat_complete(request).await
}

/// Check a request before anything goes on the wire
pub fn validate_request(request: &ChatRequest) -> Result<(), LlmError> {
    if request.model.trim().is_empty() {
        return Err(LlmError::InvalidRequest("model identifier is empty".to_string()));
    }

    if request.messages.is_empty() {
        return Err(LlmError::InvalidRequest("message sequence is empty".to_string()));
    }

    if request.max_tokens == Some(0) {
        return Err(LlmError::InvalidRequest("max_tokens must be a positive integer".to_string()));
    }

    if let Some(temperature) = request.temperature {
        if !temperature.is_finite() || !(0.0..=2.0).contains(&temperature) {
            return Err(LlmError::InvalidRequest(format!(
                "temperature must be within [0, 2], got {}",
                temperature
            )));
        }
    }

    Ok(())
}
