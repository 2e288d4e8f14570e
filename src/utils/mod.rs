//! # Utilities
//!
//! - [`marshalling`]: Contains the trait for serializing and deserializing data.

pub(crate) mod iterator;
pub mod marshalling;
