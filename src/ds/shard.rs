//! Stable key-to-stripe mapping.
//!
//! ```text
//!   key bytes ──► DefaultHasher(seed, key) ──► hash % stripes ──► stripe index
//!
//!   ┌──────────┬──────────┬──────────┬──────────┐
//!   │ stripe 0 │ stripe 1 │ stripe 2 │ stripe 3 │
//!   └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! `DefaultHasher::new()` is SipHash with fixed keys, so the mapping depends
//! only on `(key, seed, stripes)`. It never changes for the lifetime of a
//! selector and is identical across selectors built with the same inputs.
//!
//! ```
//! use stripekit::ds::ShardSelector;
//!
//! let selector = ShardSelector::new(4, 0);
//! let stripe = selector.shard_for_key(b"user:123".as_slice());
//! assert!(stripe < 4);
//! assert_eq!(selector.shard_for_key(b"user:123".as_slice()), stripe);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic stripe selector using a seeded hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardSelector {
    shards: usize,
    seed: u64,
}

impl ShardSelector {
    /// Creates a selector over `shards` stripes. A count of zero is clamped to 1;
    /// callers that must reject zero check it before getting here.
    pub fn new(shards: usize, seed: u64) -> Self {
        Self {
            shards: shards.max(1),
            seed,
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Maps a key to a stripe index in `[0, shards)`.
    pub fn shard_for_key<K: Hash + ?Sized>(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        key.hash(&mut hasher);
        (hasher.finish() % self.shards as u64) as usize
    }
}

impl Default for ShardSelector {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
