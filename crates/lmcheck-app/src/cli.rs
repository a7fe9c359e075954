use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for lmcheck
#[derive(Parser, Debug)]
#[command(name = "lmcheck")]
#[command(about = "Connection checks and one-shot prompts for OpenAI-compatible LLM servers (LM Studio, llama.cpp, LocalAI)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// API root of the server (e.g., http://localhost:1234/v1)
    /// Overrides LMSTUDIO_API_HOST
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// API key sent as a bearer token. Overrides LMSTUDIO_API_KEY
    #[arg(long, value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    /// Model identifier. Overrides MODEL_CHOICE
    #[arg(long, short = 'm', value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Give up on a request after this many seconds. Overrides LMSTUDIO_TIMEOUT_SECS
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<String>,

    /// Enable verbose debug output (shows HTTP requests, responses, headers, etc.)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Write every HTTP request and response to log files
    #[arg(long, global = true)]
    pub log_requests: bool,

    /// Directory for request logs (default: ~/.lmcheck/logs)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Test the connection: list models, then run one chat completion (default)
    Check,
    /// Send "Say Hello World" to the model and print the reply
    Hello,
    /// Send one prompt to the model and print the reply
    Ask {
        /// The user message
        prompt: String,
        /// Optional system message sent before the prompt
        #[arg(short = 's', long, value_name = "TEXT")]
        system: Option<String>,
        /// Upper bound on generated tokens
        #[arg(long, value_name = "N")]
        max_tokens: Option<u32>,
        /// Sampling temperature, 0 to 2
        #[arg(short = 't', long, value_name = "T")]
        temperature: Option<f32>,
    },
    /// List the models the server offers
    Models,
}

impl Cli {
    /// Subcommand to run, `check` when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}
