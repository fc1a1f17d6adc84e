//! Access token for the Sheets API.

use super::cli;
use crate::config;
use std::error::Error;

/// Return the configured token, or ask `gcloud` for one.
pub fn access_token(configured: Option<&str>) -> Result<String, Box<dyn Error>> {
    if let Some(token) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        log::debug!("Using access token from {}", config::ENV_ACCESS_TOKEN);
        return Ok(token.to_string());
    }

    log::info!(
        "{} not set, running '{}'",
        config::ENV_ACCESS_TOKEN,
        config::TOKEN_COMMAND
    );
    let output = cli::run(config::TOKEN_COMMAND)
        .map_err(|e| format!("Could not get an access token: {e}"))?;
    let token = output.trim();
    if token.is_empty() {
        return Err(format!("'{}' returned an empty token", config::TOKEN_COMMAND).into());
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_token_is_trimmed() {
        let token = access_token(Some(" ya29.token\n")).expect("Configured token should be used");
        assert_eq!(token, "ya29.token");
    }
}
