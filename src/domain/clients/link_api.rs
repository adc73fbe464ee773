//! Client trait for the remote link-management API.

use crate::domain::entities::{LinkStatus, StatsRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Remote link service interface.
///
/// Each method performs exactly one request. An `error` object in the reply
/// surfaces as [`AppError::Remote`].
///
/// # Implementations
///
/// - [`crate::infrastructure::vk::VkApiClient`] - VK API over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Asks the service whether the URL may be shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLink`] if the reply has no recognizable status.
    async fn check_link(&self, url: &str) -> Result<LinkStatus, AppError>;

    /// Creates a short link and returns its full URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnexpectedResponse`] if `short_url` is missing.
    async fn get_short_link(&self, url: &str) -> Result<String, AppError>;

    /// Fetches the first all-time stats record for a short link key.
    ///
    /// Returns `Ok(None)` while the link has no stats yet. Records after the
    /// first are not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnexpectedResponse`] if the first record has no `views`.
    async fn get_link_stats(&self, key: &str) -> Result<Option<StatsRecord>, AppError>;
}
