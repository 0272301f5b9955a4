// src/notify/mod.rs
//! Record improvement notifications
//!
//! The fire-and-forget side of the search: a dedicated listener thread
//! receives [`RecordEvent`](crate::miner::RecordEvent)s from the tracker,
//! prints the improvement block, and delivers best-effort desktop
//! notifications. Nothing here can block or fail the search loop.

/// Listener thread and delivery implementation
pub mod notifier;

// Re-export main component
pub use notifier::Notifier;
