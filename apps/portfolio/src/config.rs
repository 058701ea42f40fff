use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
/// Everything has a default, so a bare environment still yields a usable config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Overrides the location of the durable state file.
    pub state_file: Option<PathBuf>,
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_url = std::env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let http_timeout = match std::env::var("PORTFOLIO_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("PORTFOLIO_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Config {
            api_url: normalize_base_url(&api_url),
            state_file: std::env::var_os("PORTFOLIO_STATE_FILE").map(PathBuf::from),
            http_timeout: Duration::from_secs(http_timeout),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Config pointing at an arbitrary backend, used by tests and embedders.
    pub fn for_api_url(api_url: &str) -> Self {
        Config {
            api_url: normalize_base_url(api_url),
            state_file: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            rust_log: "info".to_string(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:8080//"),
            "http://localhost:8080"
        );
        assert_eq!(normalize_base_url(" https://cv.example.com "), "https://cv.example.com");
    }

    #[test]
    fn test_for_api_url_uses_defaults() {
        let config = Config::for_api_url("http://127.0.0.1:9000/");
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert!(config.state_file.is_none());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }
}
