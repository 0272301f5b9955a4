// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the mining application
///
/// Only configuration problems are fatal; everything else the search can
/// hit at runtime (randomness hiccups, notification delivery, status-line
/// writes) is handled where it occurs and logged.
#[derive(Error, Debug)]
pub enum MinerError {
    /// Configuration file or parameter errors, including an unusable prefix
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Random source unavailable for a single attempt
    #[error("Randomness unavailable: {0}")]
    RandomnessError(String),
}

/// Converts random-source errors into MinerError
///
/// Raised when a candidate generator fails to fill its suffix buffer; the
/// worker logs it and skips the attempt.
impl From<rand::Error> for MinerError {
    fn from(e: rand::Error) -> Self {
        MinerError::RandomnessError(e.to_string())
    }
}
