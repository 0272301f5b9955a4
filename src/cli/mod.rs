// src/cli/mod.rs
//! Command-line interface definitions
//!
//! Clap derive types for the `start`, `bench`, and `config` subcommands.
//! Parsing failures (including a missing prefix) surface as clap usage
//! errors with a non-zero exit before any search state is built.

/// Subcommand and option definitions
pub mod commands;

// Re-export for easier access
pub use commands::{Action, BenchOptions, Commands, ConfigOptions, StartOptions};
