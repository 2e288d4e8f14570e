//! # Arithmetic
//!
//! Finite field arithmetic over [GF(256)](gf256), the field every share byte lives in.

pub mod gf256;
