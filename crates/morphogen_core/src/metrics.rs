//! Run metrics and structured logging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use morphogen_data::SimulationResult;
use tracing_subscriber::EnvFilter;

/// Counters across every run of a process.
pub struct Metrics {
    run_count: AtomicU64,
    tick_count: AtomicU64,
    cycles_found: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_count: AtomicU64::new(0),
            tick_count: AtomicU64::new(0),
            cycles_found: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a finished run with its wall time.
    pub fn record_run(&self, duration: Duration, result: &SimulationResult) {
        let runs = self.run_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.tick_count
            .fetch_add(result.history.len() as u64, Ordering::Relaxed);
        if result.cycle.found {
            self.cycles_found.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            run = runs,
            ticks = result.history.len(),
            sentences = result.stats.len(),
            cycle_found = result.cycle.found,
            period = result.cycle.period,
            duration_us = duration.as_micros() as u64,
            "Simulation run"
        );
    }

    /// Runs recorded so far.
    #[must_use]
    pub fn run_count(&self) -> u64 {
        self.run_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn cycles_found(&self) -> u64 {
        self.cycles_found.load(Ordering::Relaxed)
    }

    /// Wall time since these metrics were created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins over `level`. Logs go to stderr so JSON on stdout stays clean.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
