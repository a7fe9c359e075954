use std::path::PathBuf;
use std::time::Duration;

use crate::error::LlmError;

pub mod env;
pub use env::{
    ENV_BASE_URL, ENV_API_KEY, ENV_MODEL, ENV_TIMEOUT_SECS,
    ENV_VERBOSE, ENV_LOG_REQUESTS, ENV_LOG_DIR,
    parse_flag, parse_timeout_secs,
};

/// Default API root of a local LM Studio server
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// Placeholder credential; local servers accept any key
pub const DEFAULT_API_KEY: &str = "lm-studio";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Connection settings for one inference server.
///
/// Built once at startup and passed by reference to every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:1234/v1`
    pub base_url: String,

    /// Sent as `Authorization: Bearer <api_key>`
    pub api_key: String,

    /// Model identifier used when a caller has no preference
    pub model: String,

    /// Bound on connecting and on the whole request; `None` waits forever
    pub timeout: Option<Duration>,

    /// Print every HTTP exchange to the console
    pub verbose: bool,

    /// Write every HTTP exchange to log files
    pub log_requests: bool,

    /// Where log files go; `~/.lmcheck/logs` when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            verbose: false,
            log_requests: false,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `base_url` with every other field at its default
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            ..Self::default()
        }
    }

    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// A default applies exactly when `lookup` returns `None` for its variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup(ENV_API_KEY).unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let model = lookup(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout = lookup(ENV_TIMEOUT_SECS)
            .map(|value| parse_timeout_secs(&value))
            .transpose()?;
        let verbose = lookup(ENV_VERBOSE)
            .map(|value| parse_flag(ENV_VERBOSE, &value))
            .transpose()?
            .unwrap_or(false);
        let log_requests = lookup(ENV_LOG_REQUESTS)
            .map(|value| parse_flag(ENV_LOG_REQUESTS, &value))
            .transpose()?
            .unwrap_or(false);
        let log_dir = lookup(ENV_LOG_DIR).map(PathBuf::from);

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            api_key,
            model,
            timeout,
            verbose,
            log_requests,
            log_dir,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_requests(mut self, log_dir: Option<PathBuf>) -> Self {
        self.log_requests = true;
        self.log_dir = log_dir;
        self
    }

    /// `GET` endpoint listing available models
    pub fn models_url(&self) -> String {
        format!("{}/models", normalize_base_url(&self.base_url))
    }

    /// `POST` endpoint for chat completions
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", normalize_base_url(&self.base_url))
    }

    /// `host:port` of the server, for display
    pub fn server_host(&self) -> String {
        match reqwest::Url::parse(&self.base_url) {
            Ok(url) => match (url.host_str(), url.port_or_known_default()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                _ => self.base_url.clone(),
            },
            Err(_) => self.base_url.clone(),
        }
    }
}

/// Normalize a base URL to the API root.
///
/// Trailing slashes are dropped, and a full endpoint URL (ending in
/// `/chat/completions` or `/models`) is cut back to the root it belongs to.
pub fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().trim_end_matches('/');

    for suffix in ["/chat/completions", "/models"] {
        if let Some(stripped) = url.strip_suffix(suffix) {
            url = stripped.trim_end_matches('/');
            break;
        }
    }

    url.to_string()
}
