//! VK API client over HTTPS.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::domain::clients::LinkApi;
use crate::domain::entities::{LinkStatus, StatsRecord};
use crate::error::AppError;
use crate::infrastructure::vk::envelope::{
    ApiEnvelope, CheckLinkPayload, LinkStatsPayload, ShortLinkPayload,
};

const CHECK_LINK: &str = "utils.checkLink";
const GET_SHORT_LINK: &str = "utils.getShortLink";
const GET_LINK_STATS: &str = "utils.getLinkStats";

/// Stats are always requested for the whole lifetime of the link.
const STATS_INTERVAL: &str = "forever";

/// Client for the `utils.*` link methods of the VK API.
#[derive(Clone)]
pub struct VkApiClient {
    client: Client,
    base_url: String,
    version: String,
    token: String,
}

impl VkApiClient {
    pub fn new(base_url: &str, version: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
            token: token.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base_url, &config.api_version, &config.api_token)
    }

    /// Performs one GET against a VK method and decodes the envelope.
    ///
    /// Non-2xx statuses and non-JSON bodies become [`AppError::Transport`].
    async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<ApiEnvelope, AppError> {
        tracing::debug!(method, "Calling VK API");

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.token)
            .query(params)
            .query(&[("v", self.version.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let envelope = response.json::<ApiEnvelope>().await?;
        if envelope.error.is_some() {
            tracing::debug!(method, "VK API returned an error");
        }

        Ok(envelope)
    }
}

#[async_trait]
impl LinkApi for VkApiClient {
    async fn check_link(&self, url: &str) -> Result<LinkStatus, AppError> {
        let payload: CheckLinkPayload = self
            .call(CHECK_LINK, &[("url", url)])
            .await?
            .decode(|reason| {
                AppError::invalid_link(format!("unrecognized check link response: {reason}"))
            })?;

        payload
            .status
            .as_deref()
            .map(LinkStatus::parse)
            .ok_or_else(|| AppError::invalid_link("check link response has no status"))
    }

    async fn get_short_link(&self, url: &str) -> Result<String, AppError> {
        let payload: ShortLinkPayload = self
            .call(GET_SHORT_LINK, &[("url", url)])
            .await?
            .decode(|reason| {
                AppError::unexpected_response(format!("malformed short link response: {reason}"))
            })?;

        Ok(payload.short_url)
    }

    async fn get_link_stats(&self, key: &str) -> Result<Option<StatsRecord>, AppError> {
        let malformed = |reason: String| {
            AppError::unexpected_response(format!("malformed link stats response: {reason}"))
        };

        let payload: LinkStatsPayload = self
            .call(GET_LINK_STATS, &[("key", key), ("interval", STATS_INTERVAL)])
            .await?
            .decode(malformed)?;

        payload
            .stats
            .into_iter()
            .next()
            .map(|first| {
                serde_json::from_value::<StatsRecord>(first).map_err(|e| malformed(e.to_string()))
            })
            .transpose()
    }
}
