//! Error types for stripekit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: returned when a striped cache cannot be built from the
//!   requested budget and stripe count.
//! - [`InvariantError`]: returned by `check_invariants` when the index, the
//!   recency list and the size accounting disagree.
//!
//! Rejected writes and missing keys are not errors; they are reported as
//! `false` / `None` by the cache operations themselves.
//!
//! ## Example Usage
//!
//! ```
//! use stripekit::error::ConfigError;
//! use stripekit::policy::striped::{StripedLru, MIN_STRIPE_SIZE};
//!
//! let err = StripedLru::build(2 * MIN_STRIPE_SIZE, 4).unwrap_err();
//! assert_eq!(
//!     err,
//!     ConfigError::StripeTooSmall {
//!         stripe_capacity: 512 * 1024,
//!         minimum: MIN_STRIPE_SIZE,
//!     }
//! );
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when striped cache configuration is infeasible.
///
/// Not retryable without changing the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A stripe count of zero was requested.
    NoStripes,
    /// `total_budget / stripes` fell below the minimum viable stripe size.
    StripeTooSmall {
        /// The computed per-stripe budget in bytes.
        stripe_capacity: usize,
        /// The minimum per-stripe budget in bytes.
        minimum: usize,
    },
}

impl ConfigError {
    /// The per-stripe budget that was rejected, if that was the cause.
    pub fn stripe_capacity(&self) -> Option<usize> {
        match self {
            ConfigError::StripeTooSmall {
                stripe_capacity, ..
            } => Some(*stripe_capacity),
            ConfigError::NoStripes => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoStripes => f.write_str("stripe count must be > 0"),
            ConfigError::StripeTooSmall {
                stripe_capacity,
                minimum,
            } => write!(
                f,
                "stripe capacity {stripe_capacity} bytes is below the minimum of {minimum} bytes"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_names_both_sizes() {
        let err = ConfigError::StripeTooSmall {
            stripe_capacity: 524_288,
            minimum: 1_048_576,
        };
        let msg = err.to_string();
        assert!(msg.contains("524288"));
        assert!(msg.contains("1048576"));
    }

    #[test]
    fn config_no_stripes_display() {
        assert_eq!(ConfigError::NoStripes.to_string(), "stripe count must be > 0");
    }

    #[test]
    fn config_stripe_capacity_accessor() {
        let err = ConfigError::StripeTooSmall {
            stripe_capacity: 10,
            minimum: 20,
        };
        assert_eq!(err.stripe_capacity(), Some(10));
        assert_eq!(ConfigError::NoStripes.stripe_capacity(), None);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("size mismatch");
        assert_eq!(err.to_string(), "size mismatch");
        assert_eq!(err.message(), "size mismatch");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
