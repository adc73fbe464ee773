//! Top-level dispatch for a single URL.
//!
//! Loads nothing itself: the caller hands over the result of configuration
//! loading so a missing token is reported through the same path as every
//! other failure.

use std::io::{self, Write};
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::clients::LinkApi;
use crate::domain::entities::LinkOutcome;
use crate::error::AppError;
use crate::infrastructure::vk::VkApiClient;

/// Processes `url` with the real VK client and prints exactly one line.
///
/// Every [`AppError`] is caught and printed; only writing to `out` can fail.
pub async fn run<W: Write>(
    config: Result<Config, AppError>,
    url: &str,
    out: &mut W,
) -> io::Result<()> {
    let result = match config {
        Ok(config) => {
            config.print_summary();
            let api = Arc::new(VkApiClient::from_config(&config));
            process_with(api, &config.short_domain, url).await
        }
        Err(err) => Err(err),
    };

    report(result, out)
}

/// Processes `url` against any [`LinkApi`] implementation.
pub async fn process_with<A: LinkApi>(
    api: Arc<A>,
    short_domain: &str,
    url: &str,
) -> Result<LinkOutcome, AppError> {
    LinkService::new(api, short_domain).process(url).await
}

/// Writes the outcome or the error as a single line.
pub fn report<W: Write>(result: Result<LinkOutcome, AppError>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(outcome) => writeln!(out, "{outcome}"),
        Err(err) => {
            tracing::debug!(error = %err, "Link processing failed");
            writeln!(out, "{}", err.user_message())
        }
    }
}
