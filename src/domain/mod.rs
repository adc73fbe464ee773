//! Domain layer containing entities and the remote link API contract.
//!
//! - [`entities`] - Link classification, outcomes and stats records
//! - [`clients`] - Trait for the remote link service, implemented in
//!   [`crate::infrastructure::vk`]

pub mod clients;
pub mod entities;
