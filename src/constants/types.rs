use super::params::PARAM_SEED_SIZE;

/// Seed for the deterministic coefficient source
pub type Seed = [u8; PARAM_SEED_SIZE];

/// An element of GF(2^8)
pub type FieldElement = u8;
