// Models module - wire structures for the OpenAI-compatible API
pub mod types;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use types::{Role, ChatMessage};
pub use requests::ChatRequest;
pub use responses::{
    CompletionResponse, Choice, ChoiceMessage, Usage,
    ModelList, ModelEntry,
};
