//! # Byte-budgeted LRU Cache
//!
//! The eviction engine behind every stripe. Capacity is a byte budget, and
//! every entry is charged `key.len() + value.len()`.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                              ByteLru                                 │
//!   │                                                                      │
//!   │   index: FxHashMap<Bytes, SlotId>                                    │
//!   │   ┌─────────┬────────┐                                               │
//!   │   │ "ab"    │ id_1   │──────┐                                        │
//!   │   │ "ef"    │ id_2   │──────┼──────┐                                 │
//!   │   │ "ij"    │ id_3   │──────┼──────┼──────┐                          │
//!   │   └─────────┴────────┘      ▼      ▼      ▼                          │
//!   │   list: RecencyList<Entry>                                           │
//!   │     head ──► [ab|cd] ◄──► [ef|gh] ◄──► [ij|kl] ◄── tail              │
//!   │              (LRU, next victim)        (MRU)                         │
//!   │                                                                      │
//!   │   current_size = Σ(key.len() + value.len())   ≤   capacity           │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Path
//!
//! ```text
//!   put(k, v), k absent:
//!     1. size(k, v) > capacity           → false, nothing touched
//!     2. while current + size > capacity → pop head, unindex, subtract
//!     3. push at tail, index, add size
//!
//!   put(k, v) / set(k, v), k present:
//!     1. size(k, v) > capacity           → false, nothing touched
//!     2. move entry to tail
//!     3. while current - old + new > capacity → pop head
//!     4. replace value, adjust current
//! ```
//!
//! Step 2 of the update path runs before the sweep, so the sweep can only
//! reach the updated entry once it is the sole entry, and by then it fits.
//!
//! ## Example
//!
//! ```
//! use stripekit::policy::byte_lru::ByteLru;
//!
//! let mut cache = ByteLru::new(10);
//! assert!(cache.put(b"ab", b"cd"));
//! assert!(cache.put(b"ef", b"gh"));
//! assert!(cache.put(b"ij", b"kl")); // evicts "ab"
//!
//! assert!(cache.get(b"ab").is_none());
//! assert_eq!(cache.get(b"ef").map(|v| &v[..]), Some(&b"gh"[..]));
//! assert_eq!(cache.current_size(), 8);
//! ```
//!
//! ## Thread Safety
//!
//! `ByteLru` needs `&mut self` for every operation, reads included. Share it
//! through [`ConcurrentByteLru`](crate::policy::concurrent::ConcurrentByteLru)
//! or [`StripedLru`](crate::policy::striped::StripedLru).

use std::fmt;

use bytes::Bytes;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::InvariantError;
use crate::traits::ByteCache;

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::ByteLruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::ByteLruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{ByteLruMetricsRecorder, MetricsSnapshotProvider};

#[derive(Debug)]
struct Entry {
    key: Bytes,
    value: Bytes,
}

impl Entry {
    #[inline]
    fn size(&self) -> usize {
        self.key.len() + self.value.len()
    }
}

/// Fixed-budget LRU cache over opaque byte keys and values.
pub struct ByteLru {
    index: FxHashMap<Bytes, SlotId>,
    list: RecencyList<Entry>,
    current_size: usize,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: ByteLruMetrics,
}

impl ByteLru {
    /// Creates an empty cache holding at most `capacity` bytes.
    ///
    /// A capacity of 0 is honoured: only the empty key with an empty value fits.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: FxHashMap::default(),
            list: RecencyList::new(),
            current_size: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: ByteLruMetrics::default(),
        }
    }

    /// Creates an empty cache and reserves room for `entries` entries up front.
    pub fn with_expected_entries(capacity: usize, entries: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(entries, Default::default()),
            list: RecencyList::with_capacity(entries),
            current_size: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: ByteLruMetrics::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bytes currently charged, `Σ(key.len() + value.len())`.
    #[inline]
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is cached. Does not touch recency.
    #[inline]
    pub fn contains(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts `key` or replaces its value, marking it most recently used.
    ///
    /// Returns `false`, without evicting anything, when `key.len() + value.len()`
    /// exceeds the capacity.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> bool {
        match self.index.get(key).copied() {
            Some(id) => self.update_entry(id, value),
            None => self.insert_entry(key, value),
        }
    }

    /// Inserts `key` only if it is absent. A present key keeps its value and
    /// its recency position.
    pub fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool {
        if self.index.contains_key(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_rejected();
            return false;
        }
        self.insert_entry(key, value)
    }

    /// Replaces the value of an existing `key`. Never creates an entry.
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> bool {
        match self.index.get(key).copied() {
            Some(id) => self.update_entry(id, value),
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_set_miss();
                false
            },
        }
    }

    /// Removes `key`; returns `false` if it was not cached.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        if let Some(entry) = self.list.remove(id) {
            self.current_size -= entry.size();
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_delete();
        true
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &[u8]) -> Option<&Bytes> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_back(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key` without touching recency.
    pub fn peek(&self, key: &[u8]) -> Option<&Bytes> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// The entry the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&Bytes, &Bytes)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// The most recently used entry.
    pub fn peek_mru(&self) -> Option<(&Bytes, &Bytes)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(Bytes, Bytes)> {
        let entry = self.list.pop_front()?;
        self.index.remove(&entry.key);
        self.current_size -= entry.size();
        Some((entry.key, entry.value))
    }

    /// Iterates `(key, value)` from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &Bytes)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.list.iter().map(|entry| &entry.key)
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
        self.current_size = 0;
    }

    /// Releases memory held by freed slots.
    pub fn shrink_to_fit(&mut self) {
        self.index.shrink_to_fit();
        self.list.shrink_to_fit();
    }

    fn insert_entry(&mut self, key: &[u8], value: &[u8]) -> bool {
        let size = key.len() + value.len();
        if size > self.capacity {
            trace!(size, capacity = self.capacity, "rejecting oversized entry");
            #[cfg(feature = "metrics")]
            self.metrics.record_put_rejected();
            return false;
        }

        while self.current_size + size > self.capacity {
            if self.evict_lru().is_none() {
                break;
            }
        }

        let key = Bytes::copy_from_slice(key);
        let id = self.list.push_back(Entry {
            key: key.clone(),
            value: Bytes::copy_from_slice(value),
        });
        self.index.insert(key, id);
        self.current_size += size;

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();
        true
    }

    fn update_entry(&mut self, id: SlotId, value: &[u8]) -> bool {
        let (key_len, old_len) = match self.list.get(id) {
            Some(entry) => (entry.key.len(), entry.value.len()),
            None => return false,
        };
        if key_len + value.len() > self.capacity {
            trace!(
                size = key_len + value.len(),
                capacity = self.capacity,
                "rejecting oversized update"
            );
            #[cfg(feature = "metrics")]
            self.metrics.record_put_rejected();
            return false;
        }

        // Reposition first: the sweep below must never pick this entry.
        self.list.move_to_back(id);
        while self.current_size - old_len + value.len() > self.capacity {
            if self.list.front_id() == Some(id) || self.evict_lru().is_none() {
                break;
            }
        }

        if let Some(entry) = self.list.get_mut(id) {
            entry.value = Bytes::copy_from_slice(value);
        }
        self.current_size = self.current_size - old_len + value.len();

        #[cfg(feature = "metrics")]
        self.metrics.record_put_update();
        true
    }

    fn evict_lru(&mut self) -> Option<usize> {
        let entry = self.list.pop_front()?;
        self.index.remove(&entry.key);
        let size = entry.size();
        self.current_size -= size;

        trace!(
            evicted_bytes = size,
            current_size = self.current_size,
            "evicted least recently used entry"
        );
        #[cfg(feature = "metrics")]
        self.metrics.record_eviction(size);
        Some(size)
    }

    /// Verifies index/list agreement, link integrity, size accounting and the
    /// capacity bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_links()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }

        let mut total = 0usize;
        for (id, entry) in self.list.iter_entries() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                other => {
                    return Err(InvariantError::new(format!(
                        "key {:?} at {:?} is indexed as {:?}",
                        entry.key, id, other
                    )));
                },
            }
            total += entry.size();
        }

        if total != self.current_size {
            return Err(InvariantError::new(format!(
                "current_size {} != sum of entry sizes {}",
                self.current_size, total
            )));
        }
        if self.current_size > self.capacity {
            return Err(InvariantError::new(format!(
                "current_size {} exceeds capacity {}",
                self.current_size, self.capacity
            )));
        }
        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl ByteCache for ByteLru {
    #[inline]
    fn put(&mut self, key: &[u8], value: &[u8]) -> bool {
        ByteLru::put(self, key, value)
    }

    #[inline]
    fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool {
        ByteLru::put_if_absent(self, key, value)
    }

    #[inline]
    fn set(&mut self, key: &[u8], value: &[u8]) -> bool {
        ByteLru::set(self, key, value)
    }

    #[inline]
    fn delete(&mut self, key: &[u8]) -> bool {
        ByteLru::delete(self, key)
    }

    #[inline]
    fn get(&mut self, key: &[u8]) -> Option<&Bytes> {
        ByteLru::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteLru::len(self)
    }

    #[inline]
    fn current_size(&self) -> usize {
        self.current_size
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Debug for ByteLru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteLru")
            .field("len", &self.len())
            .field("current_size", &self.current_size)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<ByteLruMetricsSnapshot> for ByteLru {
    fn snapshot(&self) -> ByteLruMetricsSnapshot {
        self.metrics
            .to_snapshot(self.len(), self.current_size, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(cache: &ByteLru) -> Vec<&[u8]> {
        cache.keys().map(|k| &k[..]).collect()
    }

    fn value(cache: &mut ByteLru, key: &[u8]) -> Option<Vec<u8>> {
        cache.get(key).map(|v| v.to_vec())
    }

    // ==============================================
    // CORRECTNESS TESTS MODULE
    // ==============================================
    mod correctness {
        use super::*;

        mod basic_behavior {
            use super::*;

            #[test]
            fn new_cache_is_empty() {
                let cache = ByteLru::new(10);
                assert_eq!(cache.capacity(), 10);
                assert_eq!(cache.len(), 0);
                assert_eq!(cache.current_size(), 0);
                assert!(cache.is_empty());
                cache.check_invariants().unwrap();
            }

            #[test]
            fn put_then_get_round_trips() {
                let mut cache = ByteLru::new(64);
                assert!(cache.put(b"key", b"value"));
                assert_eq!(value(&mut cache, b"key"), Some(b"value".to_vec()));
                assert_eq!(cache.current_size(), 8);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn get_missing_key_changes_nothing() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");

                assert!(cache.get(b"zz").is_none());
                assert_eq!(keys(&cache), vec![&b"a"[..], &b"b"[..]]);
                assert_eq!(cache.current_size(), 4);
            }

            #[test]
            fn delete_removes_and_reports_presence() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"11");
                cache.put(b"b", b"22");

                assert!(cache.delete(b"a"));
                assert!(!cache.delete(b"a"));
                assert!(!cache.contains(b"a"));
                assert_eq!(cache.current_size(), 3);
                assert_eq!(cache.len(), 1);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn empty_key_and_value_are_valid() {
                let mut cache = ByteLru::new(4);
                assert!(cache.put(b"", b""));
                assert!(cache.contains(b""));
                assert_eq!(cache.current_size(), 0);
                assert!(cache.put(b"", b"abcd"));
                assert_eq!(cache.current_size(), 4);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn peek_does_not_touch_recency() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");

                assert_eq!(cache.peek(b"a").map(|v| &v[..]), Some(&b"1"[..]));
                assert_eq!(cache.peek_lru().map(|(k, _)| &k[..]), Some(&b"a"[..]));
                assert_eq!(cache.peek_mru().map(|(k, _)| &k[..]), Some(&b"b"[..]));
            }
        }

        mod eviction {
            use super::*;

            #[test]
            fn third_entry_evicts_least_recent() {
                let mut cache = ByteLru::new(10);
                assert!(cache.put(b"ab", b"cd"));
                assert!(cache.put(b"ef", b"gh"));
                assert!(cache.put(b"ij", b"kl"));

                assert_eq!(value(&mut cache, b"ab"), None);
                assert_eq!(value(&mut cache, b"ef"), Some(b"gh".to_vec()));
                assert_eq!(cache.current_size(), 8);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn get_protects_entry_from_next_eviction() {
                let mut cache = ByteLru::new(10);
                cache.put(b"ab", b"cd");
                cache.put(b"ef", b"gh");
                cache.get(b"ab");
                cache.put(b"ij", b"kl");

                assert!(cache.contains(b"ab"));
                assert!(!cache.contains(b"ef"));
                assert_eq!(keys(&cache), vec![&b"ab"[..], &b"ij"[..]]);
            }

            #[test]
            fn large_insert_cascades_over_several_entries() {
                let mut cache = ByteLru::new(12);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");
                cache.put(b"c", b"3");
                cache.put(b"d", b"4");
                assert_eq!(cache.current_size(), 8);

                assert!(cache.put(b"big", b"1234567"));
                assert_eq!(keys(&cache), vec![&b"d"[..], &b"big"[..]]);
                assert_eq!(cache.current_size(), 12);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn entry_exactly_at_capacity_empties_cache() {
                let mut cache = ByteLru::new(10);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");

                assert!(cache.put(b"12345", b"67890"));
                assert_eq!(cache.len(), 1);
                assert_eq!(cache.current_size(), 10);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn pop_lru_returns_head() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");
                cache.get(b"a");

                let (k, v) = cache.pop_lru().unwrap();
                assert_eq!((&k[..], &v[..]), (&b"b"[..], &b"2"[..]));
                assert_eq!(cache.current_size(), 2);
                cache.check_invariants().unwrap();
            }
        }

        mod updates {
            use super::*;

            #[test]
            fn put_existing_replaces_value_and_moves_to_tail() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");
                assert!(cache.put(b"a", b"111"));

                assert_eq!(keys(&cache), vec![&b"b"[..], &b"a"[..]]);
                assert_eq!(cache.peek(b"a").map(|v| &v[..]), Some(&b"111"[..]));
                assert_eq!(cache.current_size(), 6);
                assert_eq!(cache.len(), 2);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn growing_update_evicts_others_never_itself() {
                let mut cache = ByteLru::new(10);
                cache.put(b"a", b"1234");
                cache.put(b"b", b"123");
                assert_eq!(cache.current_size(), 9);

                // "a" is the head before the update; it must survive its own growth.
                assert!(cache.put(b"a", b"12345678"));
                assert!(!cache.contains(b"b"));
                assert_eq!(cache.peek(b"a").map(|v| &v[..]), Some(&b"12345678"[..]));
                assert_eq!(cache.current_size(), 9);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn sole_entry_can_grow_to_capacity() {
                let mut cache = ByteLru::new(10);
                cache.put(b"k", b"v");
                assert!(cache.set(b"k", b"123456789"));
                assert_eq!(cache.current_size(), 10);
                assert_eq!(cache.len(), 1);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn shrinking_update_evicts_nothing() {
                let mut cache = ByteLru::new(10);
                cache.put(b"a", b"1234");
                cache.put(b"b", b"1234");
                assert!(cache.put(b"a", b""));
                assert_eq!(cache.len(), 2);
                assert_eq!(cache.current_size(), 6);
                assert_eq!(keys(&cache), vec![&b"b"[..], &b"a"[..]]);
            }

            #[test]
            fn set_on_absent_key_creates_nothing() {
                let mut cache = ByteLru::new(10);
                assert!(!cache.set(b"z", b"v"));
                assert!(cache.is_empty());
                assert_eq!(cache.current_size(), 0);
            }

            #[test]
            fn set_on_present_key_updates_and_moves() {
                let mut cache = ByteLru::new(64);
                cache.put(b"x", b"1");
                cache.put(b"y", b"2");
                assert!(cache.set(b"x", b"9"));
                assert_eq!(keys(&cache), vec![&b"y"[..], &b"x"[..]]);
                assert_eq!(value(&mut cache, b"x"), Some(b"9".to_vec()));
            }

            #[test]
            fn put_if_absent_keeps_value_and_position() {
                let mut cache = ByteLru::new(64);
                cache.put(b"x", b"1");
                cache.put(b"y", b"2");

                assert!(!cache.put_if_absent(b"x", b"2"));
                assert_eq!(keys(&cache), vec![&b"x"[..], &b"y"[..]]);
                assert_eq!(value(&mut cache, b"x"), Some(b"1".to_vec()));
            }

            #[test]
            fn put_if_absent_inserts_new_key() {
                let mut cache = ByteLru::new(64);
                assert!(cache.put_if_absent(b"x", b"1"));
                assert_eq!(value(&mut cache, b"x"), Some(b"1".to_vec()));
            }
        }

        mod rejection {
            use super::*;

            #[test]
            fn oversized_put_leaves_cache_untouched() {
                let mut cache = ByteLru::new(10);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");

                assert!(!cache.put(b"abcdef", b"ghijkl"));
                assert_eq!(keys(&cache), vec![&b"a"[..], &b"b"[..]]);
                assert_eq!(cache.current_size(), 4);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn oversized_update_keeps_old_value_and_position() {
                let mut cache = ByteLru::new(10);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");

                assert!(!cache.put(b"a", b"1234567890"));
                assert!(!cache.set(b"a", b"1234567890"));
                assert_eq!(keys(&cache), vec![&b"a"[..], &b"b"[..]]);
                assert_eq!(cache.peek(b"a").map(|v| &v[..]), Some(&b"1"[..]));
                assert_eq!(cache.current_size(), 4);
            }

            #[test]
            fn key_length_counts_toward_budget() {
                let mut cache = ByteLru::new(5);
                assert!(!cache.put(b"abcdef", b""));
                assert!(cache.put(b"abcde", b""));
                assert!(!cache.put_if_absent(b"abc", b"def"));
                assert!(cache.contains(b"abcde"));
            }

            #[test]
            fn zero_capacity_rejects_non_empty_entries() {
                let mut cache = ByteLru::new(0);
                assert!(!cache.put(b"a", b""));
                assert!(!cache.put(b"", b"a"));
                assert!(cache.is_empty());
            }
        }

        mod maintenance {
            use super::*;

            #[test]
            fn clear_resets_size_and_index() {
                let mut cache = ByteLru::with_expected_entries(64, 8);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");
                cache.clear();

                assert!(cache.is_empty());
                assert_eq!(cache.current_size(), 0);
                assert!(cache.get(b"a").is_none());
                assert!(cache.put(b"c", b"3"));
                cache.check_invariants().unwrap();
            }

            #[test]
            fn deleted_slots_are_reused() {
                let mut cache = ByteLru::new(64);
                for i in 0..8u8 {
                    cache.put(&[i], b"v");
                }
                for i in 0..8u8 {
                    cache.delete(&[i]);
                }
                for i in 8..16u8 {
                    cache.put(&[i], b"v");
                }
                cache.shrink_to_fit();
                assert_eq!(cache.len(), 8);
                cache.check_invariants().unwrap();
            }

            #[test]
            fn iter_runs_least_to_most_recent() {
                let mut cache = ByteLru::new(64);
                cache.put(b"a", b"1");
                cache.put(b"b", b"2");
                cache.put(b"c", b"3");
                cache.get(b"a");

                let pairs: Vec<_> = cache.iter().map(|(k, v)| (k.to_vec(), v.to_vec())).collect();
                assert_eq!(
                    pairs,
                    vec![
                        (b"b".to_vec(), b"2".to_vec()),
                        (b"c".to_vec(), b"3".to_vec()),
                        (b"a".to_vec(), b"1".to_vec()),
                    ]
                );
            }

            #[test]
            fn debug_output_is_summarised() {
                let mut cache = ByteLru::new(32);
                cache.put(b"a", b"1");
                let dbg = format!("{cache:?}");
                assert!(dbg.contains("ByteLru"));
                assert!(dbg.contains("current_size: 2"));
            }

            #[test]
            fn usable_through_trait_object() {
                let mut cache = ByteLru::new(16);
                let dyn_cache: &mut dyn ByteCache = &mut cache;
                assert!(dyn_cache.put(b"a", b"1"));
                assert_eq!(dyn_cache.get(b"a").map(|v| v.to_vec()), Some(b"1".to_vec()));
                assert_eq!(dyn_cache.current_size(), 2);
                assert!(!dyn_cache.is_empty());
            }
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_follow_operations() {
            let mut cache = ByteLru::new(10);
            cache.put(b"ab", b"cd");
            cache.put(b"ef", b"gh");
            cache.put(b"ij", b"kl");
            cache.put(b"ij", b"xy");
            cache.put(b"abcdef", b"ghijkl");
            cache.get(b"ab");
            cache.get(b"ef");
            cache.set(b"zz", b"1");
            cache.delete(b"ef");

            let snap = cache.snapshot();
            assert_eq!(snap.puts_new, 3);
            assert_eq!(snap.put_updates, 1);
            assert_eq!(snap.put_rejected, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.evicted_bytes, 4);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.set_misses, 1);
            assert_eq!(snap.deletes, 1);
            assert_eq!(snap.entries, 1);
            assert_eq!(snap.current_size, 4);

            cache.reset_metrics();
            assert_eq!(cache.snapshot().puts_new, 0);
        }
    }
}
