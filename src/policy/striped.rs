//! # Lock-striped LRU
//!
//! Partitions the key space across independent [`ConcurrentByteLru`] stripes.
//! Each stripe has its own byte budget and its own lock; the router only picks
//! the stripe and forwards the call.
//!
//! ```text
//!   put(k, v)
//!      │
//!      ▼
//!   ShardSelector: hash(seed, k) % stripes
//!      │
//!      ├──► stripe 0: Mutex<ByteLru>  capacity = total / stripes
//!      ├──► stripe 1: Mutex<ByteLru>  capacity = total / stripes
//!      ├──► ...
//!      └──► stripe N-1
//! ```
//!
//! Capacity, eviction and recency are per stripe. A stripe may evict while a
//! neighbour has free space; the aggregate budget is only the sum of the
//! stripe budgets.
//!
//! ## Example
//!
//! ```
//! use stripekit::policy::striped::{StripedLru, MIN_STRIPE_SIZE};
//!
//! let cache = StripedLru::build(8 * MIN_STRIPE_SIZE, 4).unwrap();
//! assert_eq!(cache.stripe_capacity(), 2 * MIN_STRIPE_SIZE);
//!
//! assert!(cache.put(b"user:1", b"alice"));
//! assert_eq!(cache.get(b"user:1").as_deref(), Some(&b"alice"[..]));
//!
//! assert!(StripedLru::build(2 * MIN_STRIPE_SIZE, 4).is_err());
//! ```

use std::fmt;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::ds::shard::ShardSelector;
use crate::error::ConfigError;
use crate::policy::byte_lru::ByteLru;
use crate::policy::concurrent::ConcurrentByteLru;
use crate::traits::Storage;

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::ByteLruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Smallest per-stripe budget a router will accept: 1 MiB.
pub const MIN_STRIPE_SIZE: usize = 1024 * 1024;

/// Default total budget: 16 MiB.
pub const DEFAULT_MEMORY_LIMIT: usize = 16 * MIN_STRIPE_SIZE;

/// Default number of stripes.
pub const DEFAULT_STRIPES: usize = 4;

/// Hash-routed set of independently locked LRU stripes.
pub struct StripedLru {
    stripes: Vec<ConcurrentByteLru>,
    selector: ShardSelector,
    stripe_capacity: usize,
}

impl StripedLru {
    /// Splits `memory_limit` bytes evenly over `stripes` stripes with hash seed 0.
    ///
    /// Fails if `stripes` is zero or if `memory_limit / stripes` is below
    /// [`MIN_STRIPE_SIZE`]. The remainder of the division is not allocated.
    pub fn build(memory_limit: usize, stripes: usize) -> Result<Self, ConfigError> {
        Self::build_with_seed(memory_limit, stripes, 0)
    }

    /// As [`build`](Self::build), with an explicit hash seed for routing.
    pub fn build_with_seed(
        memory_limit: usize,
        stripes: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if stripes == 0 {
            warn!(memory_limit, "refusing to build striped cache with zero stripes");
            return Err(ConfigError::NoStripes);
        }

        let stripe_capacity = memory_limit / stripes;
        if stripe_capacity < MIN_STRIPE_SIZE {
            warn!(
                memory_limit,
                stripes,
                stripe_capacity,
                minimum = MIN_STRIPE_SIZE,
                "stripe budget below minimum"
            );
            return Err(ConfigError::StripeTooSmall {
                stripe_capacity,
                minimum: MIN_STRIPE_SIZE,
            });
        }

        let stripes_vec = (0..stripes)
            .map(|_| ConcurrentByteLru::new(stripe_capacity))
            .collect();

        debug!(
            memory_limit,
            stripes,
            stripe_capacity,
            seed,
            "built striped LRU cache"
        );

        Ok(Self {
            stripes: stripes_vec,
            selector: ShardSelector::new(stripes, seed),
            stripe_capacity,
        })
    }

    /// A 16 MiB cache split over 4 stripes.
    pub fn default_config() -> Result<Self, ConfigError> {
        Self::build(DEFAULT_MEMORY_LIMIT, DEFAULT_STRIPES)
    }

    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }

    pub fn stripe_capacity(&self) -> usize {
        self.stripe_capacity
    }

    /// Sum of the stripe budgets.
    pub fn capacity(&self) -> usize {
        self.stripe_capacity * self.stripes.len()
    }

    /// Index of the stripe that owns `key`.
    #[inline]
    pub fn stripe_for(&self, key: &[u8]) -> usize {
        self.selector.shard_for_key(key)
    }

    /// The stripe at `index`, if any.
    pub fn stripe(&self, index: usize) -> Option<&ConcurrentByteLru> {
        self.stripes.get(index)
    }

    #[inline]
    fn route(&self, key: &[u8]) -> &ConcurrentByteLru {
        &self.stripes[self.stripe_for(key)]
    }

    pub fn put(&self, key: &[u8], value: &[u8]) -> bool {
        self.route(key).put(key, value)
    }

    pub fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        self.route(key).put_if_absent(key, value)
    }

    pub fn set(&self, key: &[u8], value: &[u8]) -> bool {
        self.route(key).set(key, value)
    }

    pub fn delete(&self, key: &[u8]) -> bool {
        self.route(key).delete(key)
    }

    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.route(key).get(key)
    }

    pub fn peek(&self, key: &[u8]) -> Option<Bytes> {
        self.route(key).peek(key)
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.route(key).contains(key)
    }

    /// Entries across all stripes. Stripes are locked one after another, so
    /// under concurrent writes this is not a point-in-time value.
    pub fn len(&self) -> usize {
        self.stripes.iter().map(ConcurrentByteLru::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stripes.iter().all(ConcurrentByteLru::is_empty)
    }

    /// Bytes charged across all stripes; same caveat as [`len`](Self::len).
    pub fn current_size(&self) -> usize {
        self.stripes.iter().map(ConcurrentByteLru::current_size).sum()
    }

    pub fn clear(&self) {
        for stripe in &self.stripes {
            stripe.clear();
        }
    }

    /// Runs `f` on the engine that owns `key`, holding that stripe's lock.
    pub fn with_stripe<R>(&self, key: &[u8], f: impl FnOnce(&mut ByteLru) -> R) -> R {
        self.route(key).with_lock(f)
    }

    /// Sums the per-stripe counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> ByteLruMetricsSnapshot {
        self.stripes
            .iter()
            .fold(ByteLruMetricsSnapshot::default(), |acc, stripe| {
                acc + stripe.snapshot()
            })
    }
}

impl Storage for StripedLru {
    #[inline]
    fn put(&self, key: &[u8], value: &[u8]) -> bool {
        StripedLru::put(self, key, value)
    }

    #[inline]
    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        StripedLru::put_if_absent(self, key, value)
    }

    #[inline]
    fn set(&self, key: &[u8], value: &[u8]) -> bool {
        StripedLru::set(self, key, value)
    }

    #[inline]
    fn delete(&self, key: &[u8]) -> bool {
        StripedLru::delete(self, key)
    }

    #[inline]
    fn get(&self, key: &[u8]) -> Option<Bytes> {
        StripedLru::get(self, key)
    }
}

impl fmt::Debug for StripedLru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripedLru")
            .field("stripes", &self.stripes.len())
            .field("stripe_capacity", &self.stripe_capacity)
            .field("seed", &self.selector.seed())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<ByteLruMetricsSnapshot> for StripedLru {
    fn snapshot(&self) -> ByteLruMetricsSnapshot {
        self.metrics_snapshot()
    }
}
