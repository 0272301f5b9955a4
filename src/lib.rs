//! lowhash-miner - parallel search for the lowest SHA-256 hash
//!
//! Given a fixed prefix, this crate explores the space of random
//! `prefix/suffix` inputs in parallel, tracks the single lowest digest seen
//! so far, and reports progress and record improvements. The search has no
//! natural end: it runs until cancelled.
//!
//! - Candidate generation, digesting, and record tracking live in [`miner`]
//! - Throughput counting and the periodic status line live in [`stats`]
//! - Improvement announcements and desktop notifications live in [`notify`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Search core: candidates, digests, record tracking, and scheduling
pub mod miner;

/// Record improvement notifications
pub mod notify;

/// Progress counting and reporting functionality
pub mod stats;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Configuration management
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::Config;
pub use miner::{
    BestRecord, CandidateGenerator, RecordEvent, RecordTracker, Scheduler, SearchParams,
    SearchWorker,
};
pub use notify::Notifier;
pub use stats::{ProgressReporter, SearchSnapshot, SearchStats};
pub use types::Digest;
pub use utils::{MinerError, init_logging};
