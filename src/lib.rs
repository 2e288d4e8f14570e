//! # rshamir
//!
//! Shamir's Secret Sharing over GF(2^8).
//!
//! A secret of `L` bytes is split into `N` shares of `L` bytes each, such that any `T` of them reconstruct the
//! secret and any `T - 1` of them reveal nothing about it.
//!
//! - [`arith`]: GF(256) arithmetic with compile time power and log tables.
//! - [`subroutines::shamir`]: [`split`] and [`combine`].
//! - [`subroutines::prg`]: where polynomial coefficients come from.
//! - [`api`]: hex and UTF-8 encoded wrappers and the demonstration walkthrough.
//!
//! Shares are not authenticated: a corrupted or forged share silently changes the reconstructed secret.

pub mod api;
pub mod arith;
pub mod constants;
pub mod error;
pub mod subroutines;
pub mod utils;

pub use error::{Result, ShamirError};
pub use subroutines::shamir::{combine, split, split_with, Share, ShareConfig, SharedSecret};
