#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use lmcheck_llm_api::ClientConfig;

pub const TEST_API_KEY: &str = "test-api-key";

/// Mock OpenAI-compatible server for testing the chat client
pub struct LLMMockServer {
    server: MockServer,
}

impl LLMMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// API root the client should use, e.g. `http://127.0.0.1:PORT/v1`
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url()).with_api_key(TEST_API_KEY)
    }

    /// Bodies of every request the server received, parsed as JSON
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| !request.body.is_empty())
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }

    /// Mock `GET /v1/models` listing the given identifiers
    pub async fn mock_models(&self, ids: &[&str]) {
        let data: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| json!({"id": id, "object": "model", "owned_by": "organization_owner"}))
            .collect();

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": data
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock `POST /v1/chat/completions` answering with a single choice
    pub async fn mock_chat_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(response_content)))
            .mount(&self.server)
            .await;
    }

    /// Mock `POST /v1/chat/completions` that only matches an exact request body
    pub async fn mock_chat_for_body(&self, body: serde_json::Value, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(response_content)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock any request on `endpoint` with an arbitrary JSON body
    pub async fn mock_json(&self, http_method: &str, endpoint: &str, status: u16, body: serde_json::Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock any request on `endpoint` with a raw text body
    pub async fn mock_raw(&self, http_method: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a server that rejects the credential
    pub async fn mock_auth_error(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(401).set_body_json(test_data::error_scenarios::authentication_error()))
            .mount(&self.server)
            .await;
    }

    /// Mock server error
    pub async fn mock_server_error(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "Internal server error"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a server that answers too late
    pub async fn mock_slow_chat(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("late")).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any chat completion reaches the server
    pub async fn expect_no_chat(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("unexpected")))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

/// Completion body in the shape LM Studio returns
pub fn chat_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "openai/gpt-oss-20b",
        "choices": [{
            "index": 0,
            "logprobs": null,
            "finish_reason": "stop",
            "message": {
                "role": "assistant",
                "content": content
            }
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 20,
            "total_tokens": 30
        },
        "system_fingerprint": "openai/gpt-oss-20b"
    })
}

/// Test data generators
pub mod test_data {
    use lmcheck_models::{ChatMessage, ChatRequest};

    /// Create a sample request with one user message
    pub fn create_sample_request(content: &str) -> ChatRequest {
        ChatRequest::new("test-model", vec![ChatMessage::user(content)])
    }

    /// Create a multi-turn conversation
    pub fn create_complex_conversation() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a helpful AI assistant."),
            ChatMessage::user("What is Rust programming?"),
            ChatMessage::assistant("Rust is a systems programming language focused on safety and performance."),
            ChatMessage::user("Can you show me a simple example?"),
        ]
    }

    /// Error scenarios for testing
    pub mod error_scenarios {
        use serde_json::json;

        pub fn authentication_error() -> serde_json::Value {
            json!({
                "error": {
                    "type": "authentication_error",
                    "message": "Invalid API key"
                }
            })
        }
    }
}
