//! # Chronobench: Sequential vs. Partitioned-Parallel Timestamp Transform
//!
//! Generates an ordered series of timestamps, shifts every element forward
//! by one hour under two strategies, and reports the wall-clock duration
//! of each.
//!
//! ## Usage
//! ```bash
//! # Reference run: 2M hourly timestamps, all cores
//! chronobench
//!
//! # Smaller run with an explicit worker count
//! chronobench --count 500000 --threads 4
//! ```

use std::time::Instant;

use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod error;
mod pipelines;
mod transform;
mod utils;

use config::Config;
use data::TimestampSeries;
use error::{BenchError, Result};
use pipelines::{run_parallel, run_sequential};
use utils::report::{format_duration, strategy_line};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse_and_validate()?;
    let workers = config.worker_count();

    tracing::info!(
        start = %config.start,
        step_minutes = config.step_minutes,
        count = config.element_count(),
        workers,
        "generating series"
    );

    let series = TimestampSeries::generate(config.start, config.step(), config.element_count())?;
    println!("Series length: {}", series.len());

    let sequential = run_sequential(series.as_slice());
    println!(
        "{}",
        strategy_line("Without partitioned workers", sequential.elapsed, series.len())
    );

    let parallel = run_parallel(series.as_slice(), workers)?;
    println!(
        "{}",
        strategy_line("With partitioned workers", parallel.elapsed, series.len())
    );

    if sequential.values != parallel.values {
        return Err(BenchError::verification(
            "sequential and parallel results must be identical",
        ));
    }

    eprintln!("Completed in {}", format_duration(start.elapsed().as_secs_f64()));

    Ok(())
}
