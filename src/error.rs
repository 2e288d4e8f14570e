//! # Errors
//!
//! Every fallible operation in the crate returns [`Result`], carrying a [`ShamirError`].

use thiserror::Error;

/// Crate wide result type
pub type Result<T> = std::result::Result<T, ShamirError>;

/// Failures of the field kernel, the splitter, the combiner and the share encoding boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    // Configuration errors, raised before any work is done
    #[error("threshold ({threshold}) cannot exceed total shares ({total_shares})")]
    ThresholdExceedsTotal { threshold: usize, total_shares: usize },
    #[error("threshold must be at least {minimum}, got {threshold}")]
    ThresholdTooLow { threshold: usize, minimum: usize },
    #[error("at most {maximum} shares can be generated, got {total_shares}")]
    TooManyShares { total_shares: usize, maximum: usize },

    // Combination errors
    #[error("need at least {required} shares to combine, got {provided}")]
    InsufficientShares { provided: usize, required: usize },
    #[error("share index {index} appears more than once")]
    DuplicateIndex { index: u8 },
    #[error("share index 0 is not a valid evaluation point")]
    ZeroIndex,
    #[error("share {index} holds {found} bytes, expected {expected}")]
    MismatchedShareLength {
        index: u8,
        expected: usize,
        found: usize,
    },

    // Field errors
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    // Randomness
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    // Boundary encoding
    #[error("invalid share encoding: {0}")]
    InvalidShareEncoding(String),
}

impl ShamirError {
    /// Errors that come from a parameter outside `2 <= T <= N <= 255`.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ShamirError::ThresholdExceedsTotal { .. }
                | ShamirError::ThresholdTooLow { .. }
                | ShamirError::TooManyShares { .. }
        )
    }

    /// Errors where the share set makes Lagrange interpolation undefined.
    pub fn is_undefined_interpolation(&self) -> bool {
        matches!(
            self,
            ShamirError::DivisionByZero | ShamirError::DuplicateIndex { .. }
        )
    }

    /// Transient failures. The same call may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ShamirError::EntropyUnavailable(_))
    }
}
