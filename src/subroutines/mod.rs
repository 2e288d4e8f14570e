//! # Subroutines
//!
//! - [`prg`]: Coefficient sources, the operating system CSPRNG and a seeded XOF.
//! - [`shamir`]: Splitting a secret into shares and combining shares back into the secret.

pub mod prg;
pub mod shamir;
