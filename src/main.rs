// src/main.rs
use clap::Parser;
use lowhash_miner::miner::digest;
use lowhash_miner::{
    CandidateGenerator, MinerError, Notifier, ProgressReporter, RecordTracker, Scheduler,
    SearchParams, SearchStats, cli, config, utils,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Main entry point for the lowest-hash miner
///
/// # Returns
/// - `Ok(())` on clean shutdown
/// - `Err(MinerError)` if startup or shutdown fails
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Delegates to the appropriate subcommand handler
/// 3. Propagates any errors upward
fn main() -> Result<(), MinerError> {
    let cli = cli::Commands::parse();

    match cli.action {
        cli::Action::Start(opts) => start_search(opts),
        cli::Action::Bench(opts) => run_bench(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Starts the search and runs it until interrupted
///
/// # Operations
/// 1. Initializes logging and loads/validates configuration
/// 2. Wires stats → notifier → tracker → scheduler → reporter
/// 3. Blocks on the interrupt signal
/// 4. Cancels, joins all workers and the reporter, drains the notifier,
///    and reports the final record
fn start_search(opts: cli::StartOptions) -> Result<(), MinerError> {
    utils::init_logging();

    let mut config = match &opts.config {
        Some(path) => config::load(path)?,
        None => config::Config::default(),
    };
    // Apply CLI overrides
    if let Some(workers) = opts.workers {
        config.worker_threads = workers;
    }
    if let Some(batch_size) = opts.batch_size {
        config.batch_size = batch_size;
    }
    if opts.no_notify {
        config.desktop_notifications = false;
    }
    config.validate()?;

    let params = SearchParams::new(opts.prefix)?;
    let workers = config.effective_worker_threads();
    log::info!(
        "searching below prefix {:?} with {} workers (batch size {}, suffix up to {} bytes)",
        params.prefix(),
        workers,
        config.batch_size,
        params.max_suffix_len()
    );

    let stats = Arc::new(SearchStats::new());
    let (event_sender, event_receiver) = crossbeam_channel::unbounded();
    let notifier = Notifier::spawn(event_receiver, config.desktop_notifications);
    let tracker = Arc::new(RecordTracker::new(stats.clone(), event_sender));

    let scheduler = Scheduler::start(&params, workers, config.batch_size, &tracker, &stats);
    let reporter = ProgressReporter::new(
        stats.clone(),
        config.report_interval(),
        scheduler.cancel_flag(),
    )
    .start();

    // Runtime only hosts the interrupt wait; all search work is on threads
    let rt = Runtime::new()?;
    rt.block_on(tokio::signal::ctrl_c())?;

    println!();
    log::info!("interrupt received, stopping search");
    scheduler.stop();
    scheduler.join();
    if reporter.join().is_err() {
        log::error!("progress reporter panicked");
    }

    match tracker.best() {
        Some(record) => log::info!(
            "final record after {} iterations: {} from {:?} ({} leading zeros)",
            stats.iterations(),
            record.digest,
            record.input,
            record.digest.leading_zero_nibbles()
        ),
        None => log::info!("no record set in {} iterations", stats.iterations()),
    }

    // Dropping the tracker closes the event channel and lets the notifier drain
    drop(tracker);
    notifier.join();
    Ok(())
}

/// Runs the candidate/digest throughput benchmark
///
/// # Operations
/// 1. Initializes benchmark-specific logging
/// 2. Spawns worker threads generating and digesting candidates
/// 3. Collects and reports performance statistics
fn run_bench(opts: cli::BenchOptions) -> Result<(), MinerError> {
    utils::logging::init_bench_logging();

    let params = SearchParams::new(opts.prefix)?;
    let stats = Arc::new(SearchStats::new());

    log::info!(
        "benchmarking digest throughput for {} seconds on {} threads",
        opts.duration,
        opts.threads
    );
    log::logger().flush();

    let start_time = Instant::now();
    let duration = Duration::from_secs(opts.duration);
    let handles: Vec<_> = (0..opts.threads)
        .map(|_| {
            let params = params.clone();
            let stats = stats.clone();
            std::thread::spawn(move || {
                let mut generator = CandidateGenerator::new(params);
                let mut last_log = Instant::now();
                let mut hashes = 0u64;

                while start_time.elapsed() < duration {
                    match generator.next_candidate() {
                        Ok(candidate) => {
                            let _ = digest::sha256(candidate.as_bytes());
                            hashes += 1;
                            stats.record_attempt();
                        }
                        Err(e) => log::warn!("skipping attempt: {}", e),
                    }

                    // Log progress every second
                    if last_log.elapsed().as_secs() >= 1 {
                        log::debug!(
                            "Thread {:?}: {:.1} H/s",
                            std::thread::current().id(),
                            hashes as f64 / last_log.elapsed().as_secs_f64()
                        );
                        hashes = 0;
                        last_log = Instant::now();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            log::error!("benchmark thread panicked");
        }
    }

    // Report final results
    let snapshot = stats.snapshot();
    log::info!("Benchmark results:");
    log::info!("Total digests: {}", snapshot.iterations);
    log::info!("Average rate: {:.2} H/s", snapshot.rate);
    log::logger().flush();

    Ok(())
}

/// Generates a configuration template file
fn generate_config(opts: cli::ConfigOptions) -> Result<(), MinerError> {
    let template = config::generate_template();
    std::fs::write(opts.output, template)?;
    Ok(())
}
