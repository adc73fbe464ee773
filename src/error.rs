//! Application error taxonomy.
//!
//! Every failure the link processor can hit is one of these variants. The CLI
//! entry point catches them all and turns them into a single printed line via
//! [`AppError::user_message`].

use serde_json::Value;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid environment configuration.
    #[error("{0}")]
    Configuration(String),

    /// Network failure, non-2xx status or an undecodable body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with an explicit `error` object.
    #[error("{0}")]
    Remote(RemoteError),

    /// The link is banned, or the check returned an unrecognized payload.
    #[error("{0}")]
    InvalidLink(String),

    /// A success payload is missing the fields we need.
    #[error("{0}")]
    UnexpectedResponse(String),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_link(message: impl Into<String>) -> Self {
        Self::InvalidLink(message.into())
    }

    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse(message.into())
    }

    /// Renders the error as the line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(message) => format!("Configuration error: {message}"),
            AppError::Transport(err) => format!("HTTP request error: {err}"),
            AppError::Remote(err) => format!("API error: {err}"),
            AppError::InvalidLink(message) | AppError::UnexpectedResponse(message) => {
                format!("Data error: {message}")
            }
        }
    }
}

/// Content of an `error` object returned by the VK API.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    pub code: Option<i64>,
    pub message: String,
}

impl RemoteError {
    /// Builds the error from the raw `error` value.
    ///
    /// VK normally sends `{"error_code": .., "error_msg": ..}`; any other shape
    /// is kept as its JSON text so nothing is lost.
    pub fn from_value(value: &Value) -> Self {
        let code = value.get("error_code").and_then(Value::as_i64);
        let message = match value.get("error_msg").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => match value.as_str() {
                Some(text) => text.to_string(),
                None => value.to_string(),
            },
        };

        Self { code, message }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_error_from_vk_shape() {
        let err = RemoteError::from_value(&json!({
            "error_code": 5,
            "error_msg": "User authorization failed: invalid access_token",
            "request_params": []
        }));

        assert_eq!(err.code, Some(5));
        assert_eq!(err.message, "User authorization failed: invalid access_token");
        assert_eq!(
            err.to_string(),
            "User authorization failed: invalid access_token (code 5)"
        );
    }

    #[test]
    fn test_remote_error_from_plain_string() {
        let err = RemoteError::from_value(&json!("something broke"));
        assert_eq!(err.code, None);
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn test_remote_error_keeps_unknown_shape() {
        let err = RemoteError::from_value(&json!({ "reason": "nope" }));
        assert_eq!(err.code, None);
        assert_eq!(err.message, r#"{"reason":"nope"}"#);
    }

    #[test]
    fn test_user_message_prefixes() {
        assert_eq!(
            AppError::configuration("VK_API_TOKEN must be set").user_message(),
            "Configuration error: VK_API_TOKEN must be set"
        );

        let remote = AppError::Remote(RemoteError {
            code: Some(100),
            message: "One of the parameters specified was missing or invalid".to_string(),
        });
        assert_eq!(
            remote.user_message(),
            "API error: One of the parameters specified was missing or invalid (code 100)"
        );

        assert_eq!(
            AppError::invalid_link("link is banned").user_message(),
            "Data error: link is banned"
        );
        assert_eq!(
            AppError::unexpected_response("missing short_url").user_message(),
            "Data error: missing short_url"
        );
    }
}
