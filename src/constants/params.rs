// Field Parameters
/// The Galois field size GF(q) = GF(2^8) = GF(256)
pub const PARAM_FIELD_SIZE: usize = 256;
/// Order of the multiplicative group of GF(2^8)
pub const PARAM_FIELD_ORDER: u16 = 0xff;
/// The irreducible reduction polynomial x^8 + x^4 + x^3 + x + 1, the AES field
pub const PARAM_MODULUS: u16 = 0x11b;
/// The generator x + 1 ({03}) of the multiplicative group of GF(2^8)
pub const PARAM_GENERATOR: u8 = 0x03;

// Sharing Parameters
/// Smallest threshold that still splits anything
pub const PARAM_MIN_THRESHOLD: usize = 2;
/// Share indices are the non-zero field elements, so at most 255 shares
pub const PARAM_MAX_SHARES: usize = PARAM_FIELD_SIZE - 1;
/// Fewest shares `combine` accepts
pub const PARAM_MIN_COMBINE_SHARES: usize = 2;
/// Default N
pub const PARAM_DEFAULT_TOTAL_SHARES: usize = 5;
/// Default T
pub const PARAM_DEFAULT_THRESHOLD: usize = 3;

// Coefficient Source Parameters
/// Seed size in bytes for the deterministic [`crate::subroutines::prg::PRG`]
pub const PARAM_SEED_SIZE: usize = 256 / 8;
