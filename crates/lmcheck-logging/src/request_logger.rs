use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::safe_truncate;

const CONSOLE_BODY_LIMIT: usize = 5000;

/// Show only the first few characters of a credential
pub fn mask_api_key(api_key: &str) -> String {
    format!("{}***", api_key.chars().take(4).collect::<String>())
}

fn describe_url(url: &str) -> Vec<(&'static str, String)> {
    match reqwest::Url::parse(url) {
        Ok(parsed_url) => vec![
            ("URL", url.to_string()),
            ("Host", parsed_url.host_str().unwrap_or("unknown").to_string()),
            ("Port", parsed_url.port().map(|p| p.to_string()).unwrap_or_else(||
                if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
            )),
            ("Scheme", parsed_url.scheme().to_string()),
        ],
        Err(_) => vec![("URL", url.to_string())],
    }
}

fn pretty_body(body: &str) -> String {
    // Try to pretty-print JSON, fall back to raw text
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json_val| serde_json::to_string_pretty(&json_val).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_limited(text: &str) {
    if text.chars().count() > CONSOLE_BODY_LIMIT {
        println!("{}", safe_truncate(text, CONSOLE_BODY_LIMIT));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}

fn file_safe(model: &str) -> String {
    model.replace(['/', '\\', ':'], "-")
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(method: &str, url: &str, body: Option<&serde_json::Value>, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    println!("{}: {}", "Method".bright_yellow(), method);
    for (label, value) in describe_url(url) {
        println!("{}: {}", label.bright_yellow(), value);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  Authorization: Bearer {}", mask_api_key(api_key));

    if let Some(body) = body {
        println!("\n{}", "Request Body:".bright_yellow());
        match serde_json::to_string_pretty(body) {
            Ok(json) => print_limited(&json),
            Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
        }
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP request to file for persistent debugging
///
/// Returns the timestamp used in the file name so the matching response log
/// can share it.
pub fn log_request_to_file(
    logs_dir: &Path,
    method: &str,
    url: &str,
    body: Option<&serde_json::Value>,
    model: &str,
    api_key: &str,
    verbose: bool,
) -> Result<i64> {
    let now = chrono::Utc::now();
    let timestamp = now.timestamp_millis();

    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let filename = format!("req-{}-{}.txt", timestamp, file_safe(model));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Time: {}\n", now.to_rfc3339()));
    log_content.push_str(&format!("Model: {}\n\n", model));

    log_content.push_str(&format!("Method: {}\n", method));
    for (label, value) in describe_url(url) {
        log_content.push_str(&format!("{}: {}\n", label, value));
    }
    log_content.push('\n');

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!("  Authorization: Bearer {}\n\n", mask_api_key(api_key)));

    if let Some(body) = body {
        log_content.push_str("Request Body:\n");
        match serde_json::to_string_pretty(body) {
            Ok(json) => {
                log_content.push_str(&json);
                log_content.push('\n');
            }
            Err(e) => {
                log_content.push_str(&format!("Error serializing request: {}\n", e));
            }
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    if verbose {
        println!("{}", format!("📝 Request logged to: {}", file_path.display()).bright_blue());
    }

    Ok(timestamp)
}

/// Log HTTP response to file for persistent debugging
pub fn log_response_to_file(
    logs_dir: &Path,
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
    request_timestamp: i64,
    model: &str,
    verbose: bool,
) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let filename = format!("resp-{}-{}.txt", request_timestamp, file_safe(model));
    let file_path = logs_dir.join(&filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP RESPONSE LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", request_timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));

    log_content.push_str(&format!("Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    log_content.push_str("Headers:\n");
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            log_content.push_str(&format!("  {}: {}\n", name.as_str(), val_str));
        }
    }

    log_content.push_str("\nResponse Body:\n");
    log_content.push_str(&pretty_body(body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));
    log_content.push_str(&format!("Content-Type: {}\n",
        headers.get("content-type")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
    ));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    if verbose {
        println!("{}", format!("📄 Response logged to: {}", file_path.display()).bright_blue());
    }

    Ok(file_path)
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    println!("\n{}", "Response Body:".bright_yellow());
    print_limited(&pretty_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}
