use std::time::Duration;

use crate::error::LlmError;

pub const ENV_BASE_URL: &str = "LMSTUDIO_API_HOST";
pub const ENV_API_KEY: &str = "LMSTUDIO_API_KEY";
pub const ENV_MODEL: &str = "MODEL_CHOICE";
pub const ENV_TIMEOUT_SECS: &str = "LMSTUDIO_TIMEOUT_SECS";
pub const ENV_VERBOSE: &str = "LMCHECK_VERBOSE";
pub const ENV_LOG_REQUESTS: &str = "LMCHECK_LOG_REQUESTS";
pub const ENV_LOG_DIR: &str = "LMCHECK_LOG_DIR";

/// Parse a timeout given in (possibly fractional) seconds
pub fn parse_timeout_secs(value: &str) -> Result<Duration, LlmError> {
    let secs: f64 = value.trim().parse().map_err(|_| {
        LlmError::InvalidConfig(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, value))
    })?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(LlmError::InvalidConfig(format!(
            "{} must be a positive number of seconds, got '{}'",
            ENV_TIMEOUT_SECS, value
        )));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| {
        LlmError::InvalidConfig(format!("{} is out of range, got '{}': {}", ENV_TIMEOUT_SECS, value, e))
    })
}

/// Parse an on/off switch (`1/true/yes/on`, `0/false/no/off`)
pub fn parse_flag(name: &str, value: &str) -> Result<bool, LlmError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LlmError::InvalidConfig(format!(
            "{} must be a boolean (true/false), got '{}'",
            name, value
        ))),
    }
}
