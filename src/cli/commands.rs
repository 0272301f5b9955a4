// src/cli/commands.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lowhash-miner CLI - parallel search for the lowest SHA-256 hash
#[derive(Parser, Debug)]
#[command(name = "lowhash-miner")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// The action to perform (start the search, benchmark, or generate config)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the miner application
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Start the lowest-hash search for a fixed prefix
    Start(StartOptions),

    /// Benchmark candidate generation and digest throughput
    Bench(BenchOptions),

    /// Generate a configuration file template
    Config(ConfigOptions),
}

/// Options for starting the search
#[derive(Parser, Debug)]
pub struct StartOptions {
    /// Fixed prefix every candidate input starts with (at most 62 bytes)
    pub prefix: String,

    /// Path to a configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of worker threads to use (overrides config)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Candidate evaluations per batch (overrides config)
    #[arg(short, long)]
    pub batch_size: Option<u64>,

    /// Disable desktop notifications on record improvements
    #[arg(long)]
    pub no_notify: bool,
}

/// Options for running the throughput benchmark
#[derive(Parser, Debug)]
pub struct BenchOptions {
    /// Prefix to generate candidates under
    #[arg(short, long, default_value = "bench")]
    pub prefix: String,

    /// Duration of the benchmark in seconds
    #[arg(short, long, default_value_t = 10)]
    pub duration: u64,

    /// Number of threads to use
    #[arg(short, long, default_value_t = num_cpus::get())]
    pub threads: usize,
}

/// Options for generating configuration files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "config.toml")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_requires_a_prefix() {
        assert!(Commands::try_parse_from(["lowhash-miner", "start"]).is_err());

        let cli = Commands::try_parse_from(["lowhash-miner", "start", "alice"]).unwrap();
        match cli.action {
            Action::Start(opts) => {
                assert_eq!(opts.prefix, "alice");
                assert!(opts.workers.is_none());
                assert!(!opts.no_notify);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn start_accepts_overrides() {
        let cli = Commands::try_parse_from([
            "lowhash-miner",
            "start",
            "alice",
            "--workers",
            "4",
            "--batch-size",
            "500",
            "--no-notify",
        ])
        .unwrap();
        match cli.action {
            Action::Start(opts) => {
                assert_eq!(opts.workers, Some(4));
                assert_eq!(opts.batch_size, Some(500));
                assert!(opts.no_notify);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn bench_defaults() {
        let cli = Commands::try_parse_from(["lowhash-miner", "bench"]).unwrap();
        match cli.action {
            Action::Bench(opts) => {
                assert_eq!(opts.prefix, "bench");
                assert_eq!(opts.duration, 10);
                assert_eq!(opts.threads, num_cpus::get());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
