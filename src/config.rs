//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup, before any network call.
//!
//! ```bash
//! export VK_API_TOKEN="vk1.a.xxxxxxxx"
//! ```
//!
//! ## Required Variables
//!
//! - `VK_API_TOKEN` - Bearer token for the VK API
//!
//! ## Optional Variables
//!
//! - `VK_API_BASE_URL` - API root (default: `https://api.vk.com/method`)
//! - `VK_API_VERSION` - API version sent as `v` (default: `5.131`)
//! - `VK_SHORT_DOMAIN` - Host of short links (default: `vk.cc`)
//! - `RUST_LOG` - Log filter, read by [`crate::telemetry::init`] (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::error::AppError;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_API_VERSION: &str = "5.131";
pub const DEFAULT_SHORT_DOMAIN: &str = "vk.cc";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub api_base_url: String,
    pub api_version: String,
    /// Host that identifies an already shortened link.
    pub short_domain: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if `VK_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_token = env::var("VK_API_TOKEN")
            .map_err(|_| AppError::configuration("VK_API_TOKEN environment variable is not set"))?;

        let api_base_url = env::var("VK_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_version =
            env::var("VK_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let short_domain =
            env::var("VK_SHORT_DOMAIN").unwrap_or_else(|_| DEFAULT_SHORT_DOMAIN.to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_token,
            api_base_url,
            api_version,
            short_domain,
            log_format,
        })
    }

    /// Builds a configuration with defaults for everything but the token.
    pub fn with_token(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            short_domain: DEFAULT_SHORT_DOMAIN.to_string(),
            log_format: "text".to_string(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if:
    /// - the token is blank
    /// - the base URL is not `http://` or `https://`
    /// - the API version or short domain is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_token.trim().is_empty() {
            return Err(AppError::configuration("VK_API_TOKEN must not be empty"));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(AppError::configuration(format!(
                "VK_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(AppError::configuration("VK_API_VERSION must not be empty"));
        }

        if self.short_domain.trim().is_empty() {
            return Err(AppError::configuration("VK_SHORT_DOMAIN must not be empty"));
        }

        if self.log_format != "text" && self.log_format != "json" {
            return Err(AppError::configuration(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Returns whether logs should be written as JSON lines.
    pub fn uses_json_logs(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  API base URL: {}", self.api_base_url);
        tracing::debug!("  API version: {}", self.api_version);
        tracing::debug!("  API token: {}", mask_token(&self.api_token));
        tracing::debug!("  Short domain: {}", self.short_domain);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Masks a bearer token for logging, keeping only its first four characters.
fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 8 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config, AppError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
