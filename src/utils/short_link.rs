//! Short link recognition and key extraction.

use url::Url;

/// Errors that can occur while reading a short link.
#[derive(Debug, thiserror::Error)]
pub enum ShortLinkError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Short link has no key in its path")]
    MissingKey,
}

/// Returns true if `input` looks like a link on `short_domain`.
///
/// A link qualifies when its host equals the short domain, no explicit port
/// is given, and the path holds something besides slashes. Inputs that do not
/// parse as absolute URLs never qualify.
///
/// # Examples
///
/// ```ignore
/// assert!(is_short_link("https://vk.cc/abc", "vk.cc"));
/// assert!(!is_short_link("https://vk.cc/", "vk.cc"));
/// assert!(!is_short_link("https://example.com/abc", "vk.cc"));
/// ```
pub fn is_short_link(input: &str, short_domain: &str) -> bool {
    let Ok(url) = Url::parse(input) else {
        return false;
    };

    let host_matches = url
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case(short_domain));

    host_matches && url.port().is_none() && !path_key(&url).is_empty()
}

/// Extracts the lookup key of a short link: its path without surrounding slashes.
///
/// # Errors
///
/// Returns [`ShortLinkError::InvalidFormat`] for malformed URLs.
/// Returns [`ShortLinkError::MissingKey`] if the path is empty.
pub fn extract_key(input: &str) -> Result<String, ShortLinkError> {
    let url = Url::parse(input).map_err(|e| ShortLinkError::InvalidFormat(e.to_string()))?;

    let key = path_key(&url);
    if key.is_empty() {
        return Err(ShortLinkError::MissingKey);
    }

    Ok(key.to_string())
}

fn path_key(url: &Url) -> &str {
    url.path().trim_matches('/')
}
