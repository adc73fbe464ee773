//! VK API integration.

pub mod client;
pub mod envelope;

pub use client::VkApiClient;
