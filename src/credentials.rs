// file: src/credentials.rs
// description: access token resolution with GitHub CLI fallback
// reference: https://cli.github.com/manual/gh_auth_token

use crate::error::{JanitorError, Result};
use std::future::Future;
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::debug;

const MISSING_TOKEN: &str = "GitHub access token is required. Use --token flag, set it in the config file, or authenticate with the GitHub CLI";

/// Returns the configured token, or asks the GitHub CLI for one.
pub async fn resolve_token(configured: Option<&str>) -> Result<String> {
    resolve_token_with(configured, gh_auth_token).await
}

pub async fn resolve_token_with<F, Fut>(configured: Option<&str>, helper: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    if let Some(token) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    match helper().await {
        Ok(token) if !token.is_empty() => Ok(token),
        Ok(_) => Err(JanitorError::Credentials(MISSING_TOKEN.to_string())),
        Err(e) => {
            debug!("GitHub CLI token lookup failed: {}", e);
            Err(JanitorError::Credentials(MISSING_TOKEN.to_string()))
        }
    }
}

/// Runs `gh auth token`.
pub async fn gh_auth_token() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                JanitorError::Credentials(format!("gh command not found: {}", e))
            }
            _ => JanitorError::Credentials(format!("failed to execute gh auth token: {}", e)),
        })?;

    if !output.status.success() {
        return Err(JanitorError::Credentials(format!(
            "gh auth token exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
