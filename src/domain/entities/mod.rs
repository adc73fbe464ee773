//! Core domain entities.
//!
//! - [`LinkKind`] - Whether an input URL is already a short link
//! - [`LinkStatus`] - Link checker verdict
//! - [`LinkOutcome`] - What a single run produced
//! - [`StatsRecord`] - Aggregate views for a short link

pub mod link;
pub mod stats;

pub use link::{LinkKind, LinkOutcome, LinkStatus};
pub use stats::StatsRecord;
