//! Recording and snapshotting are kept apart: the engine only writes
//! counters through [`ByteLruMetricsRecorder`], readers only see
//! [`MetricsSnapshotProvider`] copies.

/// Counters recorded by the byte-budgeted LRU engine.
pub trait ByteLruMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_put_new(&mut self);
    fn record_put_update(&mut self);
    fn record_put_rejected(&mut self);
    fn record_set_miss(&mut self);
    fn record_delete(&mut self);
    fn record_eviction(&mut self, bytes: usize);
    fn record_clear(&mut self);
}

/// Produces a point-in-time copy of a metrics set.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
