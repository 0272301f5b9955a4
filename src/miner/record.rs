// src/miner/record.rs
//! Best-record tracking
//!
//! Keeps the single lowest digest seen so far behind a mutex. Every worker
//! funnels its candidates through [`RecordTracker::offer`]; the compare-and-
//! replace runs inside a short critical section, and improvement events are
//! dispatched on a channel outside of it so a slow consumer never stalls
//! the search.

use crate::stats::SearchStats;
use crate::types::Digest;
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;

/// The process-wide champion: lowest digest observed so far
#[derive(Debug, Clone)]
pub struct BestRecord {
    /// The winning digest
    pub digest: Digest,
    /// The candidate input that produced it
    pub input: String,
    /// Iteration count at the moment the record was set
    pub iteration: u64,
}

/// Event emitted once per record replacement
///
/// Carries everything the announcement and the desktop notification need,
/// snapshotted at replacement time. Dispatch order relative to replacement
/// order is not guaranteed.
#[derive(Debug, Clone)]
pub struct RecordEvent {
    /// The new record
    pub record: BestRecord,
    /// Leading zero nibbles of the new digest
    pub leading_zeros: u32,
    /// Total iterations at the time of the snapshot
    pub iterations: u64,
    /// Iterations per second at the time of the snapshot
    pub rate: f64,
}

/// Thread-safe tracker of the best record
///
/// Offers are serialized by a mutex, so "improved" results form a strictly
/// decreasing digest chain over time regardless of worker interleaving.
pub struct RecordTracker {
    best: Mutex<Option<BestRecord>>,
    stats: Arc<SearchStats>,
    events: Sender<RecordEvent>,
}

impl RecordTracker {
    /// Creates a tracker with no record yet
    ///
    /// `events` receives one [`RecordEvent`] per replacement; the send is
    /// non-blocking (unbounded channel) and a closed channel only logs.
    pub fn new(stats: Arc<SearchStats>, events: Sender<RecordEvent>) -> Self {
        RecordTracker {
            best: Mutex::new(None),
            stats,
            events,
        }
    }

    /// Offers a candidate; replaces the record iff strictly lower
    ///
    /// Returns whether the candidate improved the record, together with the
    /// iteration count observed on entry. A candidate improves the record
    /// iff no record exists yet or its digest is strictly less than the
    /// current one; equal digests never replace.
    pub fn offer(&self, digest: Digest, input: &str) -> (bool, u64) {
        let iteration = self.stats.iterations();

        let replaced = {
            let mut best = self.best.lock();
            let improves = best.as_ref().is_none_or(|record| digest < record.digest);
            if improves {
                let record = BestRecord {
                    digest,
                    input: input.to_owned(),
                    iteration,
                };
                *best = Some(record.clone());
                Some(record)
            } else {
                None
            }
        };

        match replaced {
            Some(record) => {
                let snapshot = self.stats.snapshot();
                let event = RecordEvent {
                    leading_zeros: record.digest.leading_zero_nibbles(),
                    record,
                    iterations: snapshot.iterations,
                    rate: snapshot.rate,
                };
                if self.events.send(event).is_err() {
                    log::warn!("record event listener is gone; announcement dropped");
                }
                (true, iteration)
            }
            None => (false, iteration),
        }
    }

    /// Snapshot of the current record, if any
    pub fn best(&self) -> Option<BestRecord> {
        self.best.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::thread;

    fn digest_with_first_bytes(bytes: &[u8]) -> Digest {
        let mut raw = [0xFFu8; Digest::LEN];
        raw[..bytes.len()].copy_from_slice(bytes);
        Digest::new(raw)
    }

    fn tracker() -> (Arc<RecordTracker>, crossbeam_channel::Receiver<RecordEvent>) {
        let stats = Arc::new(SearchStats::new());
        let (tx, rx) = unbounded();
        (Arc::new(RecordTracker::new(stats, tx)), rx)
    }

    #[test]
    fn first_offer_always_improves() {
        let (tracker, _rx) = tracker();
        let (improved, _) = tracker.offer(digest_with_first_bytes(&[0xFE]), "alice/aa");
        assert!(improved);
        assert_eq!(tracker.best().unwrap().input, "alice/aa");
    }

    #[test]
    fn higher_and_equal_digests_never_replace() {
        let (tracker, _rx) = tracker();
        let low = digest_with_first_bytes(&[0x10]);
        tracker.offer(low, "alice/low");

        let (improved, _) = tracker.offer(digest_with_first_bytes(&[0x20]), "alice/high");
        assert!(!improved);
        let (improved, _) = tracker.offer(low, "alice/same");
        assert!(!improved);
        assert_eq!(tracker.best().unwrap().input, "alice/low");
    }

    #[test]
    fn record_chain_is_strictly_decreasing() {
        let (tracker, rx) = tracker();
        let offers = [0x80u8, 0x90, 0x40, 0x40, 0x41, 0x05, 0x03];
        for (i, b) in offers.iter().enumerate() {
            tracker.offer(digest_with_first_bytes(&[*b]), &format!("alice/{i}"));
        }
        assert_eq!(tracker.best().unwrap().digest, digest_with_first_bytes(&[0x03]));

        // 0x80, 0x40, 0x05, 0x03 improve; one event each
        let events: Vec<RecordEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        let mut digests: Vec<Digest> = events.iter().map(|e| e.record.digest).collect();
        let sorted = {
            let mut s = digests.clone();
            s.sort();
            s.reverse();
            s
        };
        assert_eq!(digests, sorted);
        digests.dedup();
        assert_eq!(digests.len(), 4);
    }

    #[test]
    fn event_carries_score_and_input() {
        let (tracker, rx) = tracker();
        let digest = digest_with_first_bytes(&[0x00, 0x1F]);
        tracker.offer(digest, "alice/winner");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.leading_zeros, 3);
        assert_eq!(event.record.input, "alice/winner");
        assert_eq!(event.record.digest, digest);
    }

    #[test]
    fn concurrent_offers_match_sequential_minimum() {
        let mut digests = Vec::with_capacity(1024);
        for i in 0..1024u32 {
            // deterministic spread of first bytes
            let mixed = i.wrapping_mul(2654435761);
            digests.push(digest_with_first_bytes(&mixed.to_be_bytes()));
        }
        let expected = *digests.iter().min().unwrap();

        let (tracker, _rx) = tracker();
        let handles: Vec<_> = digests
            .chunks(256)
            .map(|chunk| {
                let tracker = tracker.clone();
                let chunk = chunk.to_vec();
                thread::spawn(move || {
                    for digest in chunk {
                        tracker.offer(digest, "alice/x");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(tracker.best().unwrap().digest, expected);
    }
}
