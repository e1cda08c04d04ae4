use crate::metrics::snapshot::ByteLruMetricsSnapshot;
use crate::metrics::traits::ByteLruMetricsRecorder;

/// Plain counters; synchronization comes from whoever owns the engine.
#[derive(Debug, Default, Clone)]
pub struct ByteLruMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub puts_new: u64,
    pub put_updates: u64,
    pub put_rejected: u64,
    pub set_misses: u64,
    pub deletes: u64,
    pub evicted_entries: u64,
    pub evicted_bytes: u64,
    pub clears: u64,
}

impl ByteLruMetrics {
    /// Copies the counters and attaches the given gauges.
    pub fn to_snapshot(
        &self,
        entries: usize,
        current_size: usize,
        capacity: usize,
    ) -> ByteLruMetricsSnapshot {
        ByteLruMetricsSnapshot {
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            puts_new: self.puts_new,
            put_updates: self.put_updates,
            put_rejected: self.put_rejected,
            set_misses: self.set_misses,
            deletes: self.deletes,
            evicted_entries: self.evicted_entries,
            evicted_bytes: self.evicted_bytes,
            clears: self.clears,
            entries,
            current_size,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl ByteLruMetricsRecorder for ByteLruMetrics {
    #[inline]
    fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    #[inline]
    fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    #[inline]
    fn record_put_new(&mut self) {
        self.puts_new += 1;
    }

    #[inline]
    fn record_put_update(&mut self) {
        self.put_updates += 1;
    }

    #[inline]
    fn record_put_rejected(&mut self) {
        self.put_rejected += 1;
    }

    #[inline]
    fn record_set_miss(&mut self) {
        self.set_misses += 1;
    }

    #[inline]
    fn record_delete(&mut self) {
        self.deletes += 1;
    }

    #[inline]
    fn record_eviction(&mut self, bytes: usize) {
        self.evicted_entries += 1;
        self.evicted_bytes += bytes as u64;
    }

    #[inline]
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}
