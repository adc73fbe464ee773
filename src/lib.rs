//! # vk-links
//!
//! Shortens URLs through the VK link service (`vk.cc`) and reports click
//! counts for links that are already short.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::clients::LinkApi`] trait
//! - **Application Layer** ([`application`]) - [`LinkService`] dispatch logic
//! - **Infrastructure Layer** ([`infrastructure`]) - VK API client over `reqwest`
//!
//! ## Quick Start
//!
//! ```bash
//! export VK_API_TOKEN="vk1.a.xxxxxxxx"
//!
//! # Shorten a long URL
//! cargo run -- https://example.com
//!
//! # Count clicks of a short link
//! cargo run -- https://vk.cc/abc
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use application::services::LinkService;
pub use config::Config;
pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::config::Config;
    pub use crate::domain::clients::LinkApi;
    pub use crate::domain::entities::{LinkKind, LinkOutcome, LinkStatus, StatsRecord};
    pub use crate::error::{AppError, RemoteError};
    pub use crate::infrastructure::vk::VkApiClient;
}
