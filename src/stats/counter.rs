// src/stats/counter.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Process-wide search progress: attempt counter plus search clock
///
/// The counter is incremented once per evaluated candidate by any worker
/// (atomic add, no locking) and read non-blockingly by the reporter and the
/// record tracker. The start instant is captured at construction and never
/// changes.
pub struct SearchStats {
    iterations: AtomicU64,
    start_time: Instant,
}

/// A consistent point-in-time view of the search progress
#[derive(Debug, Clone, Copy)]
pub struct SearchSnapshot {
    /// Total candidates evaluated so far
    pub iterations: u64,
    /// Time since the search started
    pub elapsed: Duration,
    /// Average iterations per second since the start
    pub rate: f64,
}

impl SearchStats {
    /// Creates a counter at zero with the clock started now
    pub fn new() -> Self {
        SearchStats {
            iterations: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Counts one evaluated candidate
    pub fn record_attempt(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a block of evaluated candidates at once
    pub fn add_attempts(&self, count: u64) {
        self.iterations.fetch_add(count, Ordering::Relaxed);
    }

    /// Current attempt count; never blocks writers
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Time elapsed since the search started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Snapshot of count, elapsed time, and average rate
    pub fn snapshot(&self) -> SearchSnapshot {
        let iterations = self.iterations();
        let elapsed = self.elapsed();
        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            iterations as f64 / secs
        } else {
            0.0
        };
        SearchSnapshot {
            iterations,
            elapsed,
            rate,
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}
