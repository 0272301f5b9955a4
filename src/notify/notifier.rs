// src/notify/notifier.rs
use crate::miner::record::RecordEvent;
use crossbeam_channel::Receiver;
use notify_rust::Notification;
use std::io::{self, Write};
use std::thread::JoinHandle;

/// Title used for every desktop notification
const NOTIFICATION_TITLE: &str = "New Lowest Hash Found";

/// Background consumer of record improvement events
///
/// Drains the event channel on its own thread: prints the multi-line
/// improvement block to stdout and, when enabled, hands the event to the
/// desktop notification service. Both deliveries are best-effort; failures
/// are logged and never reach the search. The thread ends once every
/// sender is dropped.
pub struct Notifier {
    handle: JoinHandle<()>,
}

impl Notifier {
    /// Spawns the listener thread
    ///
    /// # Arguments
    /// * `events` - Receiving end of the record event channel
    /// * `desktop` - Whether to also deliver desktop notifications
    pub fn spawn(events: Receiver<RecordEvent>, desktop: bool) -> Self {
        let handle = std::thread::spawn(move || {
            for event in events {
                announce(&event);
                if desktop {
                    deliver(&event);
                }
            }
        });
        Notifier { handle }
    }

    /// Waits for the listener thread to drain and exit
    pub fn join(self) {
        if self.handle.join().is_err() {
            log::error!("notifier thread panicked");
        }
    }
}

/// Renders the stdout improvement block for an event
fn announcement(event: &RecordEvent) -> String {
    format!(
        "\n\nIteration: {}\nNew lowest hash: {}\nInput: {}\nLeading zeros: {}\nIterations per second: {:.2}\n",
        event.iterations,
        event.record.digest.grouped_hex(),
        event.record.input,
        event.leading_zeros,
        event.rate
    )
}

fn announce(event: &RecordEvent) {
    let mut stdout = io::stdout().lock();
    let written = writeln!(stdout, "{}", announcement(event)).and_then(|_| stdout.flush());
    if let Err(e) = written {
        log::warn!("could not announce record: {}", e);
    }
}

fn deliver(event: &RecordEvent) {
    let body = format!(
        "Hash: {}\nInput: {}\nLeading zeros: {}",
        event.record.digest.grouped_hex(),
        event.record.input,
        event.leading_zeros
    );
    if let Err(e) = Notification::new()
        .summary(NOTIFICATION_TITLE)
        .body(&body)
        .show()
    {
        log::warn!("desktop notification failed: {}", e);
    }
}
