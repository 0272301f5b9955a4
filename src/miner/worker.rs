// src/miner/worker.rs
//! Search worker implementation
//!
//! A worker owns its candidate generator and loops batches of
//! generate → digest → offer → count evaluations, checking the shared
//! cancellation flag between batches. Randomness failures skip the single
//! attempt and are logged; nothing a worker evaluates can stop it.

use crate::miner::candidate::CandidateGenerator;
use crate::miner::digest;
use crate::miner::record::RecordTracker;
use crate::stats::SearchStats;
use rand::RngCore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A single search worker
///
/// Shares only the tracker, the stats counter, and the cancellation flag
/// with the rest of the pool; generator and RNG are exclusively its own.
pub struct SearchWorker<R: RngCore> {
    generator: CandidateGenerator<R>,
    tracker: Arc<RecordTracker>,
    stats: Arc<SearchStats>,
    batch_size: u64,
    cancel: Arc<AtomicBool>,
}

impl<R: RngCore> SearchWorker<R> {
    /// Creates a worker around its exclusively-owned generator
    pub fn new(
        generator: CandidateGenerator<R>,
        tracker: Arc<RecordTracker>,
        stats: Arc<SearchStats>,
        batch_size: u64,
        cancel: Arc<AtomicBool>,
    ) -> Self {
        SearchWorker {
            generator,
            tracker,
            stats,
            batch_size,
            cancel,
        }
    }

    /// Runs batches until the cancellation flag is observed
    ///
    /// Worst-case shutdown latency is one batch of evaluations.
    pub fn run(mut self) {
        while !self.cancel.load(Ordering::Relaxed) {
            self.run_batch();
        }
    }

    /// Runs exactly one batch of evaluations
    pub fn run_batch(&mut self) {
        for _ in 0..self.batch_size {
            let candidate = match self.generator.next_candidate() {
                Ok(candidate) => candidate,
                Err(e) => {
                    log::warn!("skipping attempt, randomness unavailable: {}", e);
                    continue;
                }
            };
            let digest = digest::sha256(candidate.as_bytes());
            self.tracker.offer(digest, &candidate);
            self.stats.record_attempt();
        }
    }
}
