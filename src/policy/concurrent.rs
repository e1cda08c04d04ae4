//! Exclusive-lock wrapper around [`ByteLru`].
//!
//! Every operation, `get` included, reorders the recency list, so a
//! read/write lock would hand out write guards on every call anyway. A single
//! `parking_lot::Mutex` serializes all operations on one instance for their
//! full duration; nothing is locked per key.
//!
//! ```text
//!   thread A ──┐
//!   thread B ──┼──► Mutex<ByteLru> ──► one operation at a time
//!   thread C ──┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use stripekit::policy::concurrent::ConcurrentByteLru;
//! use stripekit::traits::Storage;
//!
//! let cache = Arc::new(ConcurrentByteLru::new(1024));
//! let writer = Arc::clone(&cache);
//! thread::spawn(move || {
//!     writer.put(b"k", b"v");
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(cache.get(b"k").as_deref(), Some(&b"v"[..]));
//! ```

use std::fmt;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::policy::byte_lru::ByteLru;
use crate::traits::Storage;

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::ByteLruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Thread-safe [`ByteLru`]; one lock for the whole instance.
pub struct ConcurrentByteLru {
    inner: Mutex<ByteLru>,
}

impl ConcurrentByteLru {
    /// Creates a locked engine with a byte budget of `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self::from_inner(ByteLru::new(capacity))
    }

    /// Takes ownership of an existing engine.
    pub fn from_inner(cache: ByteLru) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the engine.
    pub fn into_inner(self) -> ByteLru {
        self.inner.into_inner()
    }

    /// Runs `f` with the lock held, for callers that need several operations
    /// to apply as one.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut ByteLru) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }

    pub fn put(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().put(key, value)
    }

    pub fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().put_if_absent(key, value)
    }

    pub fn set(&self, key: &[u8], value: &[u8]) -> bool {
        self.inner.lock().set(key, value)
    }

    pub fn delete(&self, key: &[u8]) -> bool {
        self.inner.lock().delete(key)
    }

    /// Returns a clone of the value (a reference-count bump) and marks the key
    /// most recently used.
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.inner.lock().get(key).cloned()
    }

    /// Reads without touching recency.
    pub fn peek(&self, key: &[u8]) -> Option<Bytes> {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn current_size(&self) -> usize {
        self.inner.lock().current_size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Storage for ConcurrentByteLru {
    #[inline]
    fn put(&self, key: &[u8], value: &[u8]) -> bool {
        ConcurrentByteLru::put(self, key, value)
    }

    #[inline]
    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool {
        ConcurrentByteLru::put_if_absent(self, key, value)
    }

    #[inline]
    fn set(&self, key: &[u8], value: &[u8]) -> bool {
        ConcurrentByteLru::set(self, key, value)
    }

    #[inline]
    fn delete(&self, key: &[u8]) -> bool {
        ConcurrentByteLru::delete(self, key)
    }

    #[inline]
    fn get(&self, key: &[u8]) -> Option<Bytes> {
        ConcurrentByteLru::get(self, key)
    }
}

impl fmt::Debug for ConcurrentByteLru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentByteLru")
            .field("len", &cache.len())
            .field("current_size", &cache.current_size())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<ByteLruMetricsSnapshot> for ConcurrentByteLru {
    fn snapshot(&self) -> ByteLruMetricsSnapshot {
        self.inner.lock().snapshot()
    }
}
