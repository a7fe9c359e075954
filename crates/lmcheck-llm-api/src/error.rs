use std::error::Error as StdError;
use std::time::Duration;

use lmcheck_logging::safe_truncate;
use thiserror::Error;

const ERROR_BODY_LIMIT: usize = 500;

/// Every way a call to the inference server can fail
#[derive(Debug, Error)]
pub enum LlmError {
    /// Server unreachable, connection refused, DNS failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Credential rejected (HTTP 401 / 403)
    #[error("authentication rejected (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// No response within the configured bound
    #[error("request timed out{}", describe_timeout(.after))]
    Timeout { after: Option<Duration> },

    /// Malformed body, unexpected shape or unexpected status
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Well-formed response without a usable completion
    #[error("server returned no usable completion")]
    EmptyResponse,

    /// Rejected locally, never sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn describe_timeout(after: &Option<Duration>) -> String {
    match after {
        Some(duration) => format!(" after {:.2}s", duration.as_secs_f64()),
        None => String::new(),
    }
}

impl LlmError {
    /// Short name of the error kind, as shown in reports
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Connection(_) => "ConnectionError",
            LlmError::Auth { .. } => "AuthError",
            LlmError::Timeout { .. } => "TimeoutError",
            LlmError::Protocol(_) => "ProtocolError",
            LlmError::EmptyResponse => "EmptyResponseError",
            LlmError::InvalidRequest(_) => "InvalidRequest",
            LlmError::InvalidConfig(_) => "InvalidConfig",
        }
    }

    /// Classify a reqwest transport failure.
    ///
    /// A timeout while still connecting counts as a connection failure: the
    /// server was never reached.
    pub fn from_transport(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        let detail = error_chain(&err);
        if err.is_connect() {
            LlmError::Connection(detail)
        } else if err.is_timeout() {
            LlmError::Timeout { after: timeout }
        } else if err.is_builder() {
            LlmError::InvalidConfig(detail)
        } else if err.is_decode() {
            LlmError::Protocol(detail)
        } else {
            LlmError::Connection(detail)
        }
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = extract_error_message(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("no response body").to_string());

        match status.as_u16() {
            401 | 403 => LlmError::Auth {
                status: status.as_u16(),
                message,
            },
            code => LlmError::Protocol(format!("HTTP {}: {}", code, message)),
        }
    }
}

/// Flatten an error and its sources into one line
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Pull a readable message out of an error body.
///
/// Understands `{"error": {"message": ...}}` (OpenAI), `{"error": "..."}`
/// (LM Studio, llama.cpp) and `{"message": ...}`; anything else is returned
/// as trimmed raw text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let message = value["error"]["message"]
            .as_str()
            .or_else(|| value["error"].as_str())
            .or_else(|| value["message"].as_str());
        if let Some(message) = message {
            return Some(message.to_string());
        }
    }

    Some(safe_truncate(trimmed, ERROR_BODY_LIMIT))
}
