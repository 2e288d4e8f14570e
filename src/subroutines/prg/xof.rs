//! # Extendable output function (XOF).
//!
//! The deterministic coefficient stream is squeezed from SHAKE256, absorbing only the seed.
//! Successive squeezes continue the same output stream, so drawing `n` bytes at once or
//! in several calls yields the same bytes.

use tiny_keccak::{Hasher, Shake, Xof};

use crate::constants::types::Seed;

/// SHAKE256 instance absorbed with a [`Seed`]
pub struct ShamirXOF {
    xof: Shake,
}

impl ShamirXOF {
    /// Initialize the XOF with a [`Seed`]
    pub fn init(seed: &Seed) -> Self {
        let mut xof = Shake::v256();
        xof.update(seed);
        ShamirXOF { xof }
    }

    /// Squeeze the XOF to get the output of size `output.len()`
    pub fn squeeze(&mut self, output: &mut [u8]) {
        self.xof.squeeze(output);
    }
}
