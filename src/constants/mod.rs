//! # Constants
//!
//! Field and sharing parameters are exposed through the [`params`] module.
//!
//! The [`types`] module contains the types shared across the crate like
//! [`crate::constants::types::Seed`].

pub mod params;
pub mod types;
