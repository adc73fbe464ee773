//! Utility functions for URL handling.
//!
//! - [`short_link`] - Short link recognition and key extraction

pub mod short_link;
