//! # Storage Trait Hierarchy
//!
//! Two views of the same five-operation contract:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            ByteCache (&mut self)        │   single owner, no locking
//!   │                                         │   implemented by ByteLru
//!   │  put / put_if_absent / set → bool       │
//!   │  delete → bool                          │
//!   │  get → Option<&Bytes>  (marks recent)   │
//!   └─────────────────────────────────────────┘
//!
//!   ┌─────────────────────────────────────────┐
//!   │        Storage (&self, Send + Sync)     │   shared across threads
//!   │                                         │   implemented by ConcurrentByteLru
//!   │  put / put_if_absent / set → bool       │   and StripedLru
//!   │  delete → bool                          │
//!   │  get → Option<Bytes>   (marks recent)   │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Keys and values are opaque byte strings. Every entry is charged
//! `key.len() + value.len()` bytes against the capacity.
//!
//! | Operation       | Key present                  | Key absent            |
//! |-----------------|------------------------------|-----------------------|
//! | `put`           | replace value, mark recent   | insert, mark recent   |
//! | `put_if_absent` | `false`, nothing changes     | insert, mark recent   |
//! | `set`           | replace value, mark recent   | `false`               |
//! | `delete`        | remove                       | `false`               |
//! | `get`           | return value, mark recent    | `None`                |
//!
//! Writes also return `false` when the single entry is larger than the
//! capacity; in that case nothing is evicted.

use bytes::Bytes;

/// Single-threaded byte cache; every operation needs exclusive access.
pub trait ByteCache {
    /// Inserts or replaces `key`. Returns `false` only if the entry can never fit.
    fn put(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Inserts `key` only if it is absent.
    fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Replaces the value of an existing `key`; never creates an entry.
    fn set(&mut self, key: &[u8], value: &[u8]) -> bool;

    /// Removes `key`; `false` if it was not present.
    fn delete(&mut self, key: &[u8]) -> bool;

    /// Returns the value and marks `key` most recently used.
    fn get(&mut self, key: &[u8]) -> Option<&Bytes>;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes currently charged against the capacity.
    fn current_size(&self) -> usize;

    /// Byte budget.
    fn capacity(&self) -> usize;
}

/// Thread-safe storage capability consumed by the protocol layer.
///
/// Object safe, so servers can hold a `Arc<dyn Storage>`.
pub trait Storage: Send + Sync {
    fn put(&self, key: &[u8], value: &[u8]) -> bool;

    fn put_if_absent(&self, key: &[u8], value: &[u8]) -> bool;

    fn set(&self, key: &[u8], value: &[u8]) -> bool;

    fn delete(&self, key: &[u8]) -> bool;

    /// Returns a cheap clone of the stored value and marks `key` most recently used.
    fn get(&self, key: &[u8]) -> Option<Bytes>;
}
