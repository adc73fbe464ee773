//! Remote service contracts.

pub mod link_api;

pub use link_api::LinkApi;

#[cfg(test)]
pub use link_api::MockLinkApi;
