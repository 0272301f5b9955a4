// src/config/config.rs
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for the search
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration. CLI flags override individual fields after
/// loading. The fixed prefix is deliberately not part of the file: it is
/// the one required startup argument.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Number of search worker threads (0 = auto-detect)
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,

    /// Candidate evaluations per batch between cancellation checks
    /// (default: 1000)
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,

    /// Seconds between throughput status updates (default: 1)
    #[serde(default = "default_report_interval_secs")]
    pub report_interval_secs: u64,

    /// Send a desktop notification on each new lowest hash (default: true)
    #[serde(default = "default_desktop_notifications")]
    pub desktop_notifications: bool,
}

fn default_worker_threads() -> usize {
    0
}

fn default_batch_size() -> u64 {
    1000
}

fn default_report_interval_secs() -> u64 {
    1
}

fn default_desktop_notifications() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_threads: default_worker_threads(),
            batch_size: default_batch_size(),
            report_interval_secs: default_report_interval_secs(),
            desktop_notifications: default_desktop_notifications(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(MinerError)` - If the file couldn't be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, MinerError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            MinerError::ConfigError(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&config_str)
            .map_err(|e| MinerError::ConfigError(format!("Invalid config format: {}", e)))
    }

    /// Rejects settings the search cannot run with
    pub fn validate(&self) -> Result<(), MinerError> {
        if self.batch_size == 0 {
            return Err(MinerError::ConfigError(
                "batch_size must be at least 1".into(),
            ));
        }
        if self.report_interval_secs == 0 {
            return Err(MinerError::ConfigError(
                "report_interval_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Worker thread count with auto-detection applied
    pub fn effective_worker_threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }

    /// Reporter tick interval as a [`Duration`]
    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }

    /// Generates a commented configuration template string
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# lowhash-miner configuration\n\n");
        template.push_str("# Number of search worker threads (0 = auto-detect)\n");
        template.push_str("worker_threads = 0\n");
        template.push_str("# Candidate evaluations per batch between cancellation checks\n");
        template.push_str("batch_size = 1000\n");
        template.push_str("# Seconds between throughput status updates\n");
        template.push_str("report_interval_secs = 1\n");
        template.push_str("# Send a desktop notification on each new lowest hash\n");
        template.push_str("desktop_notifications = true\n");
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.worker_threads, 0);
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.report_interval_secs, 1);
        assert!(config.desktop_notifications);
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config =
            toml::from_str("worker_threads = 4\ndesktop_notifications = false").unwrap();
        assert_eq!(config.worker_threads, 4);
        assert_eq!(config.batch_size, 1000);
        assert!(!config.desktop_notifications);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config: Config = toml::from_str("batch_size = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_report_interval_is_rejected() {
        let config: Config = toml::from_str("report_interval_secs = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn auto_detect_resolves_to_available_parallelism() {
        let config = Config::default();
        assert_eq!(config.effective_worker_threads(), num_cpus::get());

        let pinned = Config {
            worker_threads: 3,
            ..Config::default()
        };
        assert_eq!(pinned.effective_worker_threads(), 3);
    }

    #[test]
    fn template_parses_back_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_template()).unwrap();
        assert_eq!(config.worker_threads, Config::default().worker_threads);
        assert_eq!(config.batch_size, Config::default().batch_size);
        config.validate().unwrap();
    }
}
