//! Infrastructure layer: concrete clients for external services.
//!
//! - [`vk`] - VK API client implementing [`crate::domain::clients::LinkApi`]

pub mod vk;
