// src/miner/mod.rs
//! Core search functionality
//!
//! This module contains all components of the lowest-hash search:
//! - Candidate generation (random suffixes under a fixed prefix)
//! - The SHA-256 digest engine
//! - Best-record tracking
//! - Worker threads and pool scheduling

/// Candidate input generation
///
/// Derives the per-process search parameters from the fixed prefix and
/// produces randomized `prefix/suffix` candidate strings.
pub mod candidate;

/// SHA-256 digest engine
pub mod digest;

/// Best-record tracking
///
/// The mutex-guarded champion record, the offer operation, and the
/// improvement events consumed by the notifier.
pub mod record;

/// Worker pool scheduler
///
/// Spawns worker threads and owns the cooperative cancellation flag.
pub mod scheduler;

/// Worker thread implementation
///
/// The batched generate → digest → offer evaluation loop.
pub mod worker;

// Re-export main components for cleaner imports
pub use self::candidate::{CandidateGenerator, SearchParams};
pub use self::record::{BestRecord, RecordEvent, RecordTracker};
pub use self::scheduler::Scheduler;
pub use self::worker::SearchWorker;
