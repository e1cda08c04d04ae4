//! Per-engine operation counters (feature `metrics`).
//!
//! Recording lives in [`metrics_impl::ByteLruMetrics`], owned by each
//! [`ByteLru`](crate::policy::byte_lru::ByteLru) and mutated under the same
//! `&mut` access as the cache itself. Consumers read copies through
//! [`traits::MetricsSnapshotProvider`].

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
