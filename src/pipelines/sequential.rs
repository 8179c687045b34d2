//! # Sequential Strategy
//!
//! Single-threaded baseline: apply the transform to every element in
//! original order on the calling thread.

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::pipelines::TimedRun;
use crate::transform::shift_timestamp;

/// Apply the transform to every element in order. The elapsed time covers
/// the apply step only.
pub fn run_sequential(values: &[NaiveDateTime]) -> TimedRun {
    let start = Instant::now();
    let transformed: Vec<NaiveDateTime> = values.iter().copied().map(shift_timestamp).collect();
    let elapsed = start.elapsed();

    tracing::debug!(
        elements = transformed.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "sequential transform complete"
    );

    TimedRun {
        values: transformed,
        elapsed,
    }
}
