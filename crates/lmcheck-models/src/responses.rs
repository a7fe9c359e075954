use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Response of `POST {base_url}/chat/completions`
///
/// Only the fields the client reads are modelled. Extra fields servers add
/// (`id`, `object`, `created`, `system_fingerprint`, ...) are ignored, but a
/// missing `choices` array is a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index: Option<u32>,
    pub message: ChoiceMessage,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_reason: Option<String>,
}

/// Generated message. `content` is null for some servers when the model
/// produced nothing usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Response of `GET {base_url}/models`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelList {
    pub data: Vec<ModelEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owned_by: Option<String>,
}

impl ModelList {
    /// Model identifiers in server order
    pub fn ids(self) -> Vec<String> {
        self.data.into_iter().map(|entry| entry.id).collect()
    }
}
