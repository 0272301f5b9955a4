// src/config/mod.rs
//! Configuration management
//!
//! This module handles all configuration-related functionality including:
//! - Loading and parsing the TOML configuration file
//! - Validation and auto-detection of worker threads
//! - Generating a commented configuration template
//!
//! The fixed search prefix is not configurable here; it is the required
//! command-line argument.

/// Core configuration implementation
pub mod config;

// Re-export key items for easy access
pub use config::Config;

use crate::utils::error::MinerError;
use std::path::PathBuf;

/// Loads the search configuration from a TOML file
///
/// # Returns
/// * `Ok(Config)` - Successfully loaded configuration
/// * `Err(MinerError)` - If the file couldn't be read or parsed
pub fn load(path: impl Into<PathBuf>) -> Result<Config, MinerError> {
    Config::load(path)
}

/// Generates a commented configuration template
pub fn generate_template() -> String {
    Config::generate_template()
}
