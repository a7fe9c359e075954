//! # lmcheck-llm-api
//!
//! A minimal client for inference servers that speak the OpenAI-compatible
//! HTTP API (LM Studio, llama.cpp server, LocalAI, vLLM, ...).
//!
//! ## Features
//!
//! - **Two operations**: list the models a server offers, and run one chat completion
//! - **Explicit configuration**: a [`ClientConfig`] read once from the environment and passed by reference
//! - **Typed errors**: every failure maps onto one [`LlmError`] kind, nothing is retried
//! - **Debug logging**: optional console dumps and log files of every HTTP exchange
//!
//! ## Example
//!
//! ```rust,no_run
//! use lmcheck_llm_api::{chat_complete, ClientConfig};
//! use lmcheck_models::{ChatMessage, ChatRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!
//!     let request = ChatRequest::new(
//!         config.model.clone(),
//!         vec![ChatMessage::user("Say Hello World")],
//!     );
//!
//!     let response = chat_complete(&config, &request).await?;
//!     println!("Response: {}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{
    LlmClient,
    OpenAiCompatClient,
    ChatResponse,
    TokenUsage,
    chat_complete,
    list_models,
    validate_request,
};

pub use config::{
    ClientConfig,
    DEFAULT_BASE_URL,
    DEFAULT_API_KEY,
    DEFAULT_MODEL,
    normalize_base_url,
};

pub use error::LlmError;
