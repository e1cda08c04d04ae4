use std::ops::{Add, AddAssign};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteLruMetricsSnapshot {
    pub get_hits: u64,
    pub get_misses: u64,

    pub puts_new: u64,
    pub put_updates: u64,
    pub put_rejected: u64, // oversized, or put_if_absent on a live key
    pub set_misses: u64,
    pub deletes: u64,

    pub evicted_entries: u64,
    pub evicted_bytes: u64,
    pub clears: u64,

    // gauges captured at snapshot time
    pub entries: usize,
    pub current_size: usize,
    pub capacity: usize,
}

impl ByteLruMetricsSnapshot {
    /// Fraction of gets that found their key, `0.0` when nothing was read.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.get_hits + self.get_misses;
        if total == 0 {
            0.0
        } else {
            self.get_hits as f64 / total as f64
        }
    }
}

impl AddAssign for ByteLruMetricsSnapshot {
    fn add_assign(&mut self, rhs: Self) {
        self.get_hits += rhs.get_hits;
        self.get_misses += rhs.get_misses;
        self.puts_new += rhs.puts_new;
        self.put_updates += rhs.put_updates;
        self.put_rejected += rhs.put_rejected;
        self.set_misses += rhs.set_misses;
        self.deletes += rhs.deletes;
        self.evicted_entries += rhs.evicted_entries;
        self.evicted_bytes += rhs.evicted_bytes;
        self.clears += rhs.clears;
        self.entries += rhs.entries;
        self.current_size += rhs.current_size;
        self.capacity += rhs.capacity;
    }
}

impl Add for ByteLruMetricsSnapshot {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
