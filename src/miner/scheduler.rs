// src/miner/scheduler.rs
//! Worker pool scheduling
//!
//! Spawns the search worker threads and owns the cooperative cancellation
//! flag. Workers share nothing beyond the record tracker, the stats counter,
//! and the flag; each thread gets a fresh entropy-seeded generator.

use crate::miner::candidate::{CandidateGenerator, SearchParams};
use crate::miner::record::RecordTracker;
use crate::miner::worker::SearchWorker;
use crate::stats::SearchStats;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

/// Coordinates the pool of search workers
pub struct Scheduler {
    cancel: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawns `workers` search threads and starts them immediately
    ///
    /// # Arguments
    /// * `params` - Validated prefix parameters, cloned per worker
    /// * `workers` - Number of worker threads
    /// * `batch_size` - Evaluations per batch between cancellation checks
    /// * `tracker` - Shared best-record tracker
    /// * `stats` - Shared iteration counter
    pub fn start(
        params: &SearchParams,
        workers: usize,
        batch_size: u64,
        tracker: &Arc<RecordTracker>,
        stats: &Arc<SearchStats>,
    ) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));

        let handles = (0..workers)
            .map(|id| {
                let worker = SearchWorker::new(
                    CandidateGenerator::new(params.clone()),
                    tracker.clone(),
                    stats.clone(),
                    batch_size,
                    cancel.clone(),
                );
                std::thread::spawn(move || {
                    log::debug!("search worker {} started", id);
                    worker.run();
                    log::debug!("search worker {} stopped", id);
                })
            })
            .collect();

        Scheduler {
            cancel,
            workers: handles,
        }
    }

    /// Shared cancellation flag, for other tasks that stop with the pool
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Signals all workers to stop at their next batch boundary
    ///
    /// Idempotent and irreversible.
    pub fn stop(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Waits for every worker thread to acknowledge termination
    pub fn join(self) {
        for handle in self.workers {
            if handle.join().is_err() {
                log::error!("search worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::miner::record::RecordEvent;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    fn shared() -> (
        Arc<RecordTracker>,
        Arc<SearchStats>,
        crossbeam_channel::Receiver<RecordEvent>,
    ) {
        let stats = Arc::new(SearchStats::new());
        let (tx, rx) = unbounded();
        let tracker = Arc::new(RecordTracker::new(stats.clone(), tx));
        (tracker, stats, rx)
    }

    #[test]
    fn stop_halts_the_pool_within_a_batch() {
        let params = SearchParams::new("alice").unwrap();
        let (tracker, stats, _rx) = shared();
        let scheduler = Scheduler::start(&params, 2, 100, &tracker, &stats);

        std::thread::sleep(Duration::from_millis(50));
        scheduler.stop();
        scheduler.join();

        let evaluated = stats.iterations();
        assert!(evaluated > 0, "workers never ran");

        // the pool is quiescent after join
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(stats.iterations(), evaluated);
    }

    #[test]
    fn stop_is_idempotent() {
        let params = SearchParams::new("alice").unwrap();
        let (tracker, stats, _rx) = shared();
        let scheduler = Scheduler::start(&params, 1, 50, &tracker, &stats);
        scheduler.stop();
        scheduler.stop();
        scheduler.join();
    }

    #[test]
    fn pool_converges_on_a_record() {
        let params = SearchParams::new("alice").unwrap();
        let (tracker, stats, rx) = shared();
        let scheduler = Scheduler::start(&params, 4, 200, &tracker, &stats);

        std::thread::sleep(Duration::from_millis(50));
        scheduler.stop();
        scheduler.join();

        let best = tracker.best().expect("some candidate must have set a record");
        assert!(best.input.starts_with("alice/"));

        // each event corresponds to a replacement, the last one to the record
        let events: Vec<RecordEvent> = rx.try_iter().collect();
        assert!(!events.is_empty());
        let lowest = events.iter().map(|e| e.record.digest).min().unwrap();
        assert_eq!(lowest, best.digest);
    }
}
