//! Link classification, shortening and click counting.

use std::sync::Arc;

use crate::domain::clients::LinkApi;
use crate::domain::entities::{LinkKind, LinkOutcome, LinkStatus};
use crate::error::AppError;
use crate::utils::short_link::{extract_key, is_short_link};

/// Service that decides what to do with a URL and calls the link API.
///
/// Calls are strictly sequential: classification finishes before the
/// stats or shorten request starts.
pub struct LinkService<A: LinkApi> {
    api: Arc<A>,
    short_domain: String,
}

impl<A: LinkApi> LinkService<A> {
    /// Creates a new link service.
    pub fn new(api: Arc<A>, short_domain: impl Into<String>) -> Self {
        Self {
            api,
            short_domain: short_domain.into(),
        }
    }

    /// Decides whether `url` is an existing short link.
    ///
    /// Links on the short domain with a non-empty path are recognized without
    /// a network call. Everything else goes through the link checker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] if the checker replies with an error.
    /// Returns [`AppError::InvalidLink`] if the link is banned or the reply
    /// has an unknown status.
    pub async fn classify(&self, url: &str) -> Result<LinkKind, AppError> {
        if is_short_link(url, &self.short_domain) {
            tracing::debug!(url, "Recognized short link by shape");
            return Ok(LinkKind::ShortLink);
        }

        match self.api.check_link(url).await? {
            LinkStatus::NotBanned => {
                tracing::debug!(url, "Link checker accepted URL");
                Ok(LinkKind::LongLink)
            }
            status => {
                tracing::debug!(url, %status, "Link checker rejected URL");
                Err(AppError::invalid_link(format!(
                    "link is banned or could not be checked (status: {status})"
                )))
            }
        }
    }

    /// Creates a short link for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] if the service replies with an error.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        self.api.get_short_link(url).await
    }

    /// Returns all-time views of a short link, or 0 if it has no stats yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLink`] if no key can be read from the URL.
    /// Returns [`AppError::Remote`] if the service replies with an error.
    pub async fn count_clicks(&self, short_url: &str) -> Result<u64, AppError> {
        let key = extract_key(short_url).map_err(|e| AppError::invalid_link(e.to_string()))?;
        let first = self.api.get_link_stats(&key).await?;

        Ok(first.map_or(0, |record| record.views))
    }

    /// Classifies `url` and either counts its clicks or shortens it.
    pub async fn process(&self, url: &str) -> Result<LinkOutcome, AppError> {
        match self.classify(url).await? {
            LinkKind::ShortLink => self.count_clicks(url).await.map(LinkOutcome::Clicks),
            LinkKind::LongLink => self.shorten(url).await.map(LinkOutcome::Shortened),
        }
    }
}
