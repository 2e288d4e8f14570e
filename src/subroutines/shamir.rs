//! # Shamir's Secret Sharing over GF(256)
//!
//! Every byte of the secret is shared independently. For byte `i` a polynomial
//! `p_i(X) = secret[i] + c_1 X + ... + c_{T-1} X^{T-1}` is drawn with random coefficients, and share `x`
//! holds `p_i(x)` for `x` in `1..=N`. Any `T` shares pin down every `p_i` and thereby `p_i(0) = secret[i]`,
//! `T - 1` shares leave `p_i(0)` uniformly distributed.
//!
//! Shares are not authenticated. A corrupted share reconstructs a wrong secret without any error.

#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator as _;
use zeroize::Zeroizing;

use crate::{
    arith::gf256::{
        gf256_arith::{gf256_add, gf256_mul},
        gf256_poly::{gf256_evaluate_polynomial_horner, gf256_lagrange_weights_at_zero},
    },
    constants::params::{
        PARAM_DEFAULT_THRESHOLD, PARAM_DEFAULT_TOTAL_SHARES, PARAM_MAX_SHARES,
        PARAM_MIN_COMBINE_SHARES, PARAM_MIN_THRESHOLD,
    },
    error::{Result, ShamirError},
    subroutines::prg::{CoefficientSource, OsRandom},
    utils::{iterator::get_iterator_mut, marshalling::Marshalling},
};

/// Share count and threshold of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareConfig {
    /// (N) Number of shares to produce
    pub total_shares: usize,
    /// (T) Number of shares needed to reconstruct
    pub threshold: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            total_shares: PARAM_DEFAULT_TOTAL_SHARES,
            threshold: PARAM_DEFAULT_THRESHOLD,
        }
    }
}

impl ShareConfig {
    /// Create a validated config
    pub fn new(total_shares: usize, threshold: usize) -> Result<Self> {
        let config = ShareConfig {
            total_shares,
            threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check `2 <= T <= N <= 255`
    pub fn validate(&self) -> Result<()> {
        if self.threshold > self.total_shares {
            return Err(ShamirError::ThresholdExceedsTotal {
                threshold: self.threshold,
                total_shares: self.total_shares,
            });
        }
        if self.threshold < PARAM_MIN_THRESHOLD {
            return Err(ShamirError::ThresholdTooLow {
                threshold: self.threshold,
                minimum: PARAM_MIN_THRESHOLD,
            });
        }
        if self.total_shares > PARAM_MAX_SHARES {
            return Err(ShamirError::TooManyShares {
                total_shares: self.total_shares,
                maximum: PARAM_MAX_SHARES,
            });
        }
        Ok(())
    }
}

/// One share: the evaluations of every byte polynomial at `index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Evaluation point, in `1..=255`
    pub index: u8,
    /// One evaluation per secret byte
    pub data: Vec<u8>,
}

impl Share {
    pub fn new(index: u8, data: Vec<u8>) -> Self {
        Share { index, data }
    }

    /// Length of the secret this share belongs to
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Binary form: the index byte followed by the data
impl Marshalling<Vec<u8>> for Share {
    fn serialise(&self) -> Vec<u8> {
        let mut serialised = Vec::with_capacity(1 + self.data.len());
        serialised.push(self.index);
        serialised.extend_from_slice(&self.data);
        serialised
    }

    fn parse(serialised: &Vec<u8>) -> Result<Self> {
        match serialised.split_first() {
            None => Err(ShamirError::InvalidShareEncoding(
                "share is missing its index byte".to_string(),
            )),
            Some((0, _)) => Err(ShamirError::ZeroIndex),
            Some((index, data)) => Ok(Share::new(*index, data.to_vec())),
        }
    }
}

/// The output of a split. `threshold` and `total_shares` are advisory, nothing binds them to the shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSecret {
    pub shares: Vec<Share>,
    pub threshold: usize,
    pub total_shares: usize,
}

/// Split `secret` into `config.total_shares` shares with the operating system CSPRNG.
pub fn split(secret: &[u8], config: ShareConfig) -> Result<SharedSecret> {
    split_with(&mut OsRandom, secret, config)
}

/// Split `secret` drawing the polynomial coefficients from `source`.
///
/// Share `k` (0 based) gets index `k + 1`. Only the share data depends on `source`.
pub fn split_with<S>(source: &mut S, secret: &[u8], config: ShareConfig) -> Result<SharedSecret>
where
    S: CoefficientSource + ?Sized,
{
    config.validate()?;
    let threshold = config.threshold;

    // Higher coefficients c_1..c_{T-1} of every byte polynomial, byte after byte
    let mut random = Zeroizing::new(vec![0u8; secret.len() * (threshold - 1)]);
    source.fill_coefficients(&mut random)?;

    // Full polynomials [c_0, c_1, .., c_{T-1}] with c_0 = secret[i], concatenated
    let mut coefficients = Zeroizing::new(Vec::with_capacity(secret.len() * threshold));
    for (byte, higher) in secret.iter().zip(random.chunks_exact(threshold - 1)) {
        coefficients.push(*byte);
        coefficients.extend_from_slice(higher);
    }

    // total_shares <= 255 after validation
    let mut shares: Vec<Share> = (1..=config.total_shares as u8)
        .map(|index| Share::new(index, vec![0u8; secret.len()]))
        .collect();

    get_iterator_mut(&mut shares).for_each(|share| {
        let x = share.index;
        for (y, poly) in share.data.iter_mut().zip(coefficients.chunks_exact(threshold)) {
            *y = gf256_evaluate_polynomial_horner(poly, x);
        }
    });

    tracing::debug!(
        secret_len = secret.len(),
        total_shares = config.total_shares,
        threshold,
        "split secret"
    );

    Ok(SharedSecret {
        shares,
        threshold,
        total_shares: config.total_shares,
    })
}

/// Reconstruct the secret from `shares` by Lagrange interpolation at zero, byte by byte.
///
/// The result is only the secret if at least the original threshold of authentic shares from a single
/// split is supplied. Any two or more well formed shares produce *some* output.
pub fn combine(shares: &[Share]) -> Result<Vec<u8>> {
    if shares.len() < PARAM_MIN_COMBINE_SHARES {
        return Err(ShamirError::InsufficientShares {
            provided: shares.len(),
            required: PARAM_MIN_COMBINE_SHARES,
        });
    }
    validate_share_set(shares)?;

    let x_points: Vec<u8> = shares.iter().map(|share| share.index).collect();
    let weights = gf256_lagrange_weights_at_zero(&x_points)?;

    let secret_len = shares[0].len();
    let mut secret = vec![0u8; secret_len];
    for (share, weight) in shares.iter().zip(weights) {
        for (s, y) in secret.iter_mut().zip(&share.data) {
            *s = gf256_add(*s, gf256_mul(*y, weight));
        }
    }

    tracing::debug!(secret_len, shares = shares.len(), "combined shares");

    Ok(secret)
}

/// Reject share sets that make interpolation undefined or ambiguous:
/// index 0, repeated indices and shares of different lengths.
fn validate_share_set(shares: &[Share]) -> Result<()> {
    let expected = shares[0].len();
    let mut seen = [false; 256];
    for share in shares {
        if share.index == 0 {
            return Err(ShamirError::ZeroIndex);
        }
        if seen[share.index as usize] {
            return Err(ShamirError::DuplicateIndex { index: share.index });
        }
        seen[share.index as usize] = true;

        if share.len() != expected {
            return Err(ShamirError::MismatchedShareLength {
                index: share.index,
                expected,
                found: share.len(),
            });
        }
    }
    Ok(())
}
