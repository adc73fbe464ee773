//! Click statistics for a short link.

use serde::Deserialize;

/// One stats record from `utils.getLinkStats`.
///
/// VK may include per-interval breakdowns (sex/age, countries, cities);
/// only the aggregate view count is used here. With `interval=forever` the
/// first record holds the all-time total.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsRecord {
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub views: u64,
}
