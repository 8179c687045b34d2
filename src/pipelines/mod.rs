//! # Pipelines Module
//!
//! The two transformation strategies over the generated series: a
//! single-threaded baseline and a statically partitioned worker-pool
//! comparison. Both produce value-identical output in the same order.

pub mod parallel;
pub mod sequential;

use std::time::Duration;

use chrono::NaiveDateTime;

pub use parallel::run_parallel;
pub use sequential::run_sequential;

/// Result of one strategy: the transformed series and the wall-clock
/// duration of the transform region (generation excluded).
#[derive(Debug, Clone)]
pub struct TimedRun {
    pub values: Vec<NaiveDateTime>,
    pub elapsed: Duration,
}
