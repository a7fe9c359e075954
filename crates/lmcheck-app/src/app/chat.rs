use colored::Colorize;
use std::time::Instant;

use lmcheck_llm_api::{ChatResponse, ClientConfig, LlmClient, LlmError, TokenUsage};
use lmcheck_models::{ChatMessage, ChatRequest};

pub const HELLO_PROMPT: &str = "Say Hello World";

/// Arguments of the `ask` command
#[derive(Debug, Clone, PartialEq)]
pub struct AskOptions {
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl AskOptions {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Conversation: optional system message, then the prompt
    pub fn to_request(&self, model: &str) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.push(ChatMessage::user(self.prompt.clone()));

        let mut request = ChatRequest::new(model, messages);
        request.max_tokens = self.max_tokens;
        request.temperature = self.temperature;
        request
    }
}

fn report_error(context: &str, err: &LlmError) {
    eprintln!("{} {} failed ({}): {}", "❌".red(), context, err.kind(), err.to_string().red());
}

fn print_usage(usage: &Option<TokenUsage>) {
    if let Some(usage) = usage {
        println!(
            "{}",
            format!(
                "📊 Tokens: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            )
            .bright_black()
        );
    }
}

/// Send "Say Hello World" and print the reply
pub async fn run_hello(client: &dyn LlmClient, config: &ClientConfig) -> Result<ChatResponse, LlmError> {
    let request = ChatRequest::new(config.model.clone(), vec![ChatMessage::user(HELLO_PROMPT)]);

    println!("{} {} → {}", "📤".blue(), HELLO_PROMPT, config.chat_completions_url());

    match client.chat_complete(&request).await {
        Ok(response) => {
            println!("{}", response.content);
            print_usage(&response.usage);
            Ok(response)
        }
        Err(e) => {
            report_error("Hello request", &e);
            Err(e)
        }
    }
}

/// Send one prompt, print the reply and how long generation took
pub async fn run_ask(client: &dyn LlmClient, config: &ClientConfig, options: &AskOptions) -> Result<ChatResponse, LlmError> {
    let request = options.to_request(&config.model);

    println!("{}", "--- Generating Response ---".bright_cyan());
    let started = Instant::now();

    match client.chat_complete(&request).await {
        Ok(response) => {
            let elapsed = started.elapsed();
            println!("{}", response.content);
            println!("{}", "--- End of Response ---".bright_cyan());
            print_usage(&response.usage);
            println!(
                "{}",
                format!(
                    "⏱️  Response generated in {:.2} seconds by {}",
                    elapsed.as_secs_f64(),
                    response.model.as_deref().unwrap_or(&config.model)
                )
                .bright_black()
            );
            Ok(response)
        }
        Err(e) => {
            report_error("Chat completion", &e);
            Err(e)
        }
    }
}

/// Print every model identifier the server lists
pub async fn run_models(client: &dyn LlmClient) -> Result<Vec<String>, LlmError> {
    match client.list_models().await {
        Ok(models) => {
            if models.is_empty() {
                println!("{}", "No models available".yellow());
            }
            for model in &models {
                println!("{}", model);
            }
            Ok(models)
        }
        Err(e) => {
            report_error("Listing models", &e);
            Err(e)
        }
    }
}
