//! Application layer: orchestration of the link API calls.
//!
//! - [`services::link_service::LinkService`] - Classify, shorten, count clicks

pub mod services;
