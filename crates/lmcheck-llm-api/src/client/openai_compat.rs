use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::path::PathBuf;

use lmcheck_logging::{get_logs_dir, log_request, log_request_to_file, log_response, log_response_to_file};
use lmcheck_models::{ChatRequest, CompletionResponse, ModelList};

use crate::client::{validate_request, ChatResponse, LlmClient};
use crate::config::ClientConfig;
use crate::error::LlmError;

/// Name used in log file names for model-listing requests
const MODELS_LOG_NAME: &str = "models";

/// Client for any server exposing the OpenAI-compatible API
pub struct OpenAiCompatClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new(config: &ClientConfig) -> Result<Self, LlmError> {
        reqwest::Url::parse(&config.models_url()).map_err(|e| {
            LlmError::InvalidConfig(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout).connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn logs_dir(&self) -> Option<PathBuf> {
        self.config.log_dir.clone().or_else(|| get_logs_dir().ok())
    }

    /// Send one request and return the body of a successful response
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        log_name: &str,
    ) -> Result<String, LlmError> {
        log_request(method.as_str(), url, body.as_ref(), &self.config.api_key, self.config.verbose);

        // Logging must never fail the call
        let log_target = if self.config.log_requests {
            self.logs_dir().and_then(|dir| {
                log_request_to_file(&dir, method.as_str(), url, body.as_ref(), log_name, &self.config.api_key, self.config.verbose)
                    .ok()
                    .map(|timestamp| (dir, timestamp))
            })
        } else {
            None
        };

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LlmError::from_transport(e, self.config.timeout))?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::from_transport(e, self.config.timeout))?;

        log_response(&status, &headers, &text, self.config.verbose);
        if let Some((dir, timestamp)) = log_target {
            let _ = log_response_to_file(&dir, &status, &headers, &text, timestamp, log_name, self.config.verbose);
        }

        if !status.is_success() {
            return Err(LlmError::from_status(status, &text));
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = self.config.models_url();
        let response_text = self.send(Method::GET, &url, None, MODELS_LOG_NAME).await?;

        let models: ModelList = serde_json::from_str(&response_text)
            .map_err(|e| LlmError::Protocol(format!("unexpected model list response: {}", e)))?;

        Ok(models.ids())
    }

    async fn chat_complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        validate_request(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| LlmError::InvalidRequest(format!("failed to serialize request: {}", e)))?;
        let url = self.config.chat_completions_url();
        let response_text = self.send(Method::POST, &url, Some(body), &request.model).await?;

        let completion: CompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| LlmError::Protocol(format!("unexpected chat completion response: {}", e)))?;

        let CompletionResponse { choices, usage, model } = completion;
        let choice = choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let content = choice.message.content.ok_or(LlmError::EmptyResponse)?;

        Ok(ChatResponse {
            content,
            usage,
            model,
            finish_reason: choice.finish_reason,
        })
    }
}
