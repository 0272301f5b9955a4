// src/utils/logging.rs
//! Logging configuration and utilities
//!
//! Sets up `env_logger` with a compact line format. All log output goes to
//! stderr: stdout belongs to the overwritten status line and the record
//! announcement blocks, and the two streams must never interleave.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Initializes the logging subsystem with sensible defaults
///
/// # Configuration
/// - Logs to stderr
/// - Default log level: Info
/// - Respects `RUST_LOG` environment variable if set
pub fn init_logging() {
    common_log_config().filter(None, LevelFilter::Info).init();
}

/// Configures benchmark-specific logging
///
/// Defaults to Debug so per-thread rates are visible, unless `RUST_LOG`
/// says otherwise.
pub fn init_bench_logging() {
    let mut builder = common_log_config();

    if env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.parse_env("RUST_LOG");
    }

    builder.init();
}

/// Creates a base logger builder with the shared line format
///
/// Format: `[<epoch seconds> <level> <module>:<line>] <message>`
fn common_log_config() -> Builder {
    let mut builder = Builder::new();

    builder
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            let level = record.level();
            let module = record.module_path().unwrap_or_default();
            let line = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                ts,
                level,
                module,
                line,
                record.args()
            )
        })
        .target(Target::Stderr);

    builder
}
