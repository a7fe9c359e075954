use colored::Colorize;

use lmcheck_llm_api::{ClientConfig, LlmClient, LlmError};
use lmcheck_models::{ChatMessage, ChatRequest};

pub const CHECK_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const CHECK_USER_PROMPT: &str = "Say hello and confirm you are working.";
pub const CHECK_MAX_TOKENS: u32 = 50;
pub const CHECK_TEMPERATURE: f32 = 0.7;

/// How many model identifiers the check prints
const MODELS_SHOWN: usize = 3;

const TROUBLESHOOTING_TIPS: [&str; 5] = [
    "Ensure LM Studio is running",
    "Check that the server is started in LM Studio",
    "Verify the server address (default: localhost:1234)",
    "Make sure a model is loaded or just-in-time loading is enabled",
    "Check firewall settings",
];

/// Outcome of one step of the connection check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    Passed,
    Failed { kind: &'static str, message: String },
    /// Not attempted because an earlier step failed
    Skipped,
}

impl CheckStatus {
    fn failed(err: &LlmError) -> Self {
        CheckStatus::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }
}

/// Result of the whole connection check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Model listing through the OpenAI-compatible API
    pub api: CheckStatus,
    pub chat: CheckStatus,
    pub models: Vec<String>,
    pub reply: Option<String>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.api.passed() && self.chat.passed()
    }

    pub fn any_passed(&self) -> bool {
        self.api.passed() || self.chat.passed()
    }
}

/// Request sent by the chat step
pub fn check_request(model: &str) -> ChatRequest {
    ChatRequest::new(
        model,
        vec![
            ChatMessage::system(CHECK_SYSTEM_PROMPT),
            ChatMessage::user(CHECK_USER_PROMPT),
        ],
    )
    .with_max_tokens(CHECK_MAX_TOKENS)
    .with_temperature(CHECK_TEMPERATURE)
}

/// Numbered listing of the first few models, plus a count of the rest
pub fn model_listing_lines(models: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = models
        .iter()
        .take(MODELS_SHOWN)
        .enumerate()
        .map(|(i, id)| format!("  {}. {}", i + 1, id))
        .collect();

    if models.len() > MODELS_SHOWN {
        lines.push(format!("  ... and {} more models", models.len() - MODELS_SHOWN));
    }

    lines
}

/// Run both smoke tests in order; the chat step runs only if listing models worked
pub async fn run_connection_check(client: &dyn LlmClient, config: &ClientConfig) -> CheckReport {
    println!("{}", "=".repeat(60));
    println!("{}", "🧪 LM Studio Connection Test".bold());
    println!("{}", "=".repeat(60));

    println!("\nTesting OpenAI-compatible API at: {}", config.base_url.bright_white());

    let (api, models) = match client.list_models().await {
        Ok(models) => {
            println!("{} Successfully connected via OpenAI-compatible API", "✅".green());
            println!("📊 Available models: {}", models.len());
            for line in model_listing_lines(&models) {
                println!("{}", line);
            }
            (CheckStatus::Passed, models)
        }
        Err(e) => {
            println!("{} OpenAI-compatible API error: {}", "❌".red(), e.to_string().red());
            (CheckStatus::failed(&e), Vec::new())
        }
    };

    let (chat, reply) = if api.passed() {
        println!();
        println!("🧪 Testing chat completion with model: {}", config.model.bright_white());

        match client.chat_complete(&check_request(&config.model)).await {
            Ok(response) => {
                println!("{} Chat completion successful", "✅".green());
                println!("💬 Response: {}", response.content.trim());
                (CheckStatus::Passed, Some(response.content))
            }
            Err(e) => {
                println!("{} Chat completion failed: {}", "❌".red(), e.to_string().red());
                (CheckStatus::failed(&e), None)
            }
        }
    } else {
        (CheckStatus::Skipped, None)
    };

    CheckReport { api, chat, models, reply }
}

/// One summary row, e.g. `🌐 OpenAI-compatible API:   ✅ PASS`
pub fn summary_line(label: &str, status: &CheckStatus) -> String {
    let verdict = match status {
        CheckStatus::Passed => "✅ PASS".to_string(),
        CheckStatus::Failed { kind, .. } => format!("❌ FAIL ({})", kind),
        CheckStatus::Skipped => "❌ FAIL (skipped)".to_string(),
    };
    format!("{:<28}{}", label, verdict)
}

/// Print the summary, plus troubleshooting help when nothing worked
pub fn print_summary(report: &CheckReport, config: &ClientConfig) {
    println!("\n{}", "=".repeat(60));
    println!("📋 Test Summary:");

    let api_line = summary_line("🌐 OpenAI-compatible API:", &report.api);
    let chat_line = summary_line("💬 Chat completion:", &report.chat);
    for (line, status) in [(api_line, &report.api), (chat_line, &report.chat)] {
        if status.passed() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
    println!("{}", "=".repeat(60));

    if !report.any_passed() {
        println!("\n{}", "Troubleshooting tips:".yellow().bold());
        for (i, tip) in TROUBLESHOOTING_TIPS.iter().enumerate() {
            println!("{}. {}", i + 1, tip);
        }

        println!("\nCurrent configuration:");
        println!("  Server Host: {}", config.server_host());
        println!("  API Host: {}", config.base_url);
        println!("  Model: {}", config.model);
        match config.timeout {
            Some(timeout) => println!("  Timeout: {:.1}s", timeout.as_secs_f64()),
            None => println!("  Timeout: none"),
        }
    }
}
