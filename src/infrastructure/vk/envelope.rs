//! VK API reply envelope and per-method payloads.
//!
//! Every VK method answers with a JSON object carrying either an `error`
//! object or a `response` payload.

use crate::error::{AppError, RemoteError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub response: Option<Value>,
}

impl ApiEnvelope {
    /// Splits the envelope into its payload.
    ///
    /// Returns `Ok(None)` when neither key is present, leaving the caller to
    /// decide how to report a missing payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] if the envelope carries an `error`.
    pub fn into_response(self) -> Result<Option<Value>, AppError> {
        if let Some(error) = self.error {
            return Err(AppError::Remote(RemoteError::from_value(&error)));
        }
        Ok(self.response)
    }

    /// Decodes the payload into `T`, mapping absence or bad shape through `on_invalid`.
    pub fn decode<T, F>(self, on_invalid: F) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        F: Fn(String) -> AppError,
    {
        let payload = self
            .into_response()?
            .ok_or_else(|| on_invalid("response field is missing".to_string()))?;

        serde_json::from_value(payload).map_err(|e| on_invalid(e.to_string()))
    }
}

/// Payload of `utils.checkLink`.
#[derive(Debug, Deserialize)]
pub struct CheckLinkPayload {
    pub status: Option<String>,
}

/// Payload of `utils.getShortLink`.
#[derive(Debug, Deserialize)]
pub struct ShortLinkPayload {
    pub short_url: String,
}

/// Payload of `utils.getLinkStats`.
///
/// Records stay raw so a malformed entry past the first one is never decoded.
#[derive(Debug, Deserialize)]
pub struct LinkStatsPayload {
    #[serde(default)]
    pub stats: Vec<Value>,
}
