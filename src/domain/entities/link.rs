//! Link entities returned by the VK link API.

use std::fmt;

/// Classification of an input URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Already a short link on the short domain.
    ShortLink,
    /// Any other URL accepted by the link checker.
    LongLink,
}

/// Status reported by `utils.checkLink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    NotBanned,
    Banned,
    Processing,
    Other(String),
}

impl LinkStatus {
    /// Maps the raw `status` string onto a known status.
    pub fn parse(status: &str) -> Self {
        match status {
            "not_banned" => LinkStatus::NotBanned,
            "banned" => LinkStatus::Banned,
            "processing" => LinkStatus::Processing,
            other => LinkStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::NotBanned => f.write_str("not_banned"),
            LinkStatus::Banned => f.write_str("banned"),
            LinkStatus::Processing => f.write_str("processing"),
            LinkStatus::Other(status) => f.write_str(status),
        }
    }
}

/// Result of processing a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new short link was created for a long URL.
    Shortened(String),
    /// Total views of an existing short link.
    Clicks(u64),
}

impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkOutcome::Shortened(short_url) => write!(f, "Shortened link: {short_url}"),
            LinkOutcome::Clicks(count) => write!(f, "Total clicks: {count}"),
        }
    }
}
