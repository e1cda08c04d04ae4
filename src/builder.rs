//! Configuration builder for [`StripedLru`].
//!
//! ## Example
//!
//! ```rust
//! use stripekit::builder::StripedLruBuilder;
//! use stripekit::policy::striped::MIN_STRIPE_SIZE;
//!
//! let cache = StripedLruBuilder::new()
//!     .memory_limit(32 * MIN_STRIPE_SIZE)
//!     .stripes(8)
//!     .try_build()
//!     .unwrap();
//! assert_eq!(cache.stripe_count(), 8);
//! assert_eq!(cache.stripe_capacity(), 4 * MIN_STRIPE_SIZE);
//! ```
//!
//! | Setting        | Default  | Description                            |
//! |----------------|----------|----------------------------------------|
//! | `memory_limit` | 16 MiB   | Total byte budget, split evenly        |
//! | `stripes`      | 4        | Number of independently locked stripes |
//! | `seed`         | 0        | Hash seed for key routing              |

use crate::error::ConfigError;
use crate::policy::striped::{DEFAULT_MEMORY_LIMIT, DEFAULT_STRIPES, StripedLru};

/// Builder for [`StripedLru`]; validation happens in [`try_build`](Self::try_build).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripedLruBuilder {
    memory_limit: usize,
    stripes: usize,
    seed: u64,
}

impl StripedLruBuilder {
    pub fn new() -> Self {
        Self {
            memory_limit: DEFAULT_MEMORY_LIMIT,
            stripes: DEFAULT_STRIPES,
            seed: 0,
        }
    }

    /// Total byte budget across all stripes.
    pub fn memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = bytes;
        self
    }

    pub fn stripes(mut self, stripes: usize) -> Self {
        self.stripes = stripes;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Per-stripe budget these settings would produce, or `None` for zero stripes.
    pub fn stripe_capacity(&self) -> Option<usize> {
        self.memory_limit.checked_div(self.stripes)
    }

    pub fn try_build(self) -> Result<StripedLru, ConfigError> {
        StripedLru::build_with_seed(self.memory_limit, self.stripes, self.seed)
    }
}

impl Default for StripedLruBuilder {
    fn default() -> Self {
        Self::new()
    }
}
