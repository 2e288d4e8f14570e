//! # Coefficient sources
//!
//! The random polynomial coefficients of a split are drawn from a [`CoefficientSource`].
//!
//! - [`OsRandom`]: the operating system CSPRNG. This is what [`crate::subroutines::shamir::split`] uses.
//! - [`PRG`]: a deterministic SHAKE256 stream from a [`Seed`], see [`xof`]. Reproducible splits for
//!   tests, benchmarks and known answer vectors. Never use it for real secrets.

pub mod xof;

use rand::{rngs::OsRng, RngCore as _};
use xof::ShamirXOF;

use crate::{
    constants::{params::PARAM_SEED_SIZE, types::Seed},
    error::{Result, ShamirError},
};

/// Anything that can fill a buffer with uniformly random field elements.
pub trait CoefficientSource {
    /// Fill `out` with field elements.
    ///
    /// Failing to gather randomness is reported as [`ShamirError::EntropyUnavailable`], which is retryable.
    fn fill_coefficients(&mut self, out: &mut [u8]) -> Result<()>;
}

/// Operating system randomness through [`OsRng`]
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl CoefficientSource for OsRandom {
    fn fill_coefficients(&mut self, out: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(out)
            .map_err(|e| ShamirError::EntropyUnavailable(e.to_string()))
    }
}

/// Pseudo Random Generator (PRG) struct
///
/// Generates field elements from an extendable output function seeded with a [`Seed`].
pub struct PRG {
    xof: ShamirXOF,
}

impl PRG {
    /// Initialize the PRG with a seed
    pub fn init(seed: &Seed) -> Self {
        PRG {
            xof: ShamirXOF::init(seed),
        }
    }

    /// Initialize the PRG from a hex encoded seed of [`PARAM_SEED_SIZE`] bytes
    pub fn init_hex(seed: &str) -> Result<Self> {
        let bytes = hex::decode(seed.trim())
            .map_err(|e| ShamirError::InvalidShareEncoding(format!("seed: {}", e)))?;
        let seed: Seed = bytes.try_into().map_err(|bytes: Vec<u8>| {
            ShamirError::InvalidShareEncoding(format!(
                "seed must be {} bytes long, got {}",
                PARAM_SEED_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self::init(&seed))
    }

    /// Sample random values in the field F_q = F_256
    /// Each byte of the XOF output is one field element.
    pub fn sample_field_fq_elements(&mut self, out: &mut [u8]) {
        self.xof.squeeze(out);
    }

    /// Sample a random [`Vec`] in the field F_q = F_256
    pub fn sample_field_fq_elements_vec(&mut self, n: usize) -> Vec<u8> {
        let mut f = vec![0u8; n];
        self.xof.squeeze(&mut f);
        f
    }

    /// Sample a random [`Seed`].
    pub fn sample_seed(&mut self) -> Seed {
        let mut seed = [0u8; PARAM_SEED_SIZE];
        self.xof.squeeze(&mut seed);
        seed
    }
}

impl CoefficientSource for PRG {
    fn fill_coefficients(&mut self, out: &mut [u8]) -> Result<()> {
        self.sample_field_fq_elements(out);
        Ok(())
    }
}
