// src/stats/reporter.rs
//! Periodic progress reporting
//!
//! A background thread reads the shared [`SearchStats`] once per interval
//! and overwrites a single throughput line on stdout. Purely observational:
//! a failed write is logged and the next tick tries again. Every
//! [`HARDWARE_SUMMARY_TICKS`] ticks a CPU/memory summary goes to the log.

use crate::stats::counter::{SearchSnapshot, SearchStats};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;
use sysinfo::System;

/// Ticks between hardware summary log lines
const HARDWARE_SUMMARY_TICKS: u64 = 60;

/// Periodic throughput reporter
///
/// Stops at the first tick boundary after the shared cancellation flag is
/// set, bounding its shutdown latency to one interval.
pub struct ProgressReporter {
    stats: Arc<SearchStats>,
    interval: Duration,
    cancel: Arc<AtomicBool>,
}

impl ProgressReporter {
    /// Creates a reporter over the shared stats and cancellation flag
    pub fn new(stats: Arc<SearchStats>, interval: Duration, cancel: Arc<AtomicBool>) -> Self {
        ProgressReporter {
            stats,
            interval,
            cancel,
        }
    }

    /// Spawns the reporting thread
    pub fn start(self) -> JoinHandle<()> {
        std::thread::spawn(move || self.run())
    }

    fn run(self) {
        let mut system = System::new_all();
        let mut ticks: u64 = 0;

        while !self.cancel.load(Ordering::Relaxed) {
            std::thread::sleep(self.interval);
            if self.cancel.load(Ordering::Relaxed) {
                break;
            }

            let snapshot = self.stats.snapshot();
            if let Err(e) = emit_status(&snapshot) {
                log::warn!("status line unavailable: {}", e);
            }

            ticks += 1;
            if ticks % HARDWARE_SUMMARY_TICKS == 0 {
                log_hardware_summary(&mut system);
            }
        }
    }
}

/// Formats the overwritten status line, without the carriage return
fn format_status(snapshot: &SearchSnapshot) -> String {
    format!(
        "Iterations: {} | Iterations per second: {:.2}",
        snapshot.iterations, snapshot.rate
    )
}

fn emit_status(snapshot: &SearchSnapshot) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\r{}", format_status(snapshot))?;
    stdout.flush()
}

fn log_hardware_summary(system: &mut System) {
    system.refresh_cpu_all();
    system.refresh_memory();

    let cpus = system.cpus();
    let cpu_usage =
        cpus.iter().map(|c| c.cpu_usage()).sum::<f32>() / cpus.len().max(1) as f32;

    log::info!(
        "CPU: {:.1}% | Memory used: {} MiB",
        cpu_usage,
        system.used_memory() / (1024 * 1024)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_format() {
        let snapshot = SearchSnapshot {
            iterations: 123_456,
            elapsed: Duration::from_secs(2),
            rate: 61728.0,
        };
        assert_eq!(
            format_status(&snapshot),
            "Iterations: 123456 | Iterations per second: 61728.00"
        );
    }

    #[test]
    fn cancelled_reporter_exits_after_one_tick() {
        let stats = Arc::new(SearchStats::new());
        let cancel = Arc::new(AtomicBool::new(true));
        let reporter =
            ProgressReporter::new(stats, Duration::from_millis(5), cancel);
        reporter.start().join().unwrap();
    }

    #[test]
    fn reporter_stops_at_the_next_tick_boundary() {
        let stats = Arc::new(SearchStats::new());
        let cancel = Arc::new(AtomicBool::new(false));
        let handle = ProgressReporter::new(
            stats,
            Duration::from_millis(5),
            cancel.clone(),
        )
        .start();

        cancel.store(true, Ordering::SeqCst);
        handle.join().unwrap();
    }
}
