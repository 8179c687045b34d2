//! # Partitioned Parallel Strategy
//!
//! Splits the series into contiguous partitions and dispatches each to an
//! independent worker in a fixed-size pool. Workers share no mutable
//! state; the only synchronization point is the collection step, which
//! gathers transformed partitions by partition index (not completion
//! order) so the reassembled output order matches the sequential baseline
//! exactly.
//!
//! A panic inside a worker propagates out of the pool and aborts the run;
//! there are no retries and no partial results.

use std::time::Instant;

use chrono::NaiveDateTime;
use rayon::prelude::*;

use crate::data::PartitionPlan;
use crate::error::Result;
use crate::pipelines::TimedRun;
use crate::transform::shift_timestamp;
use crate::utils::threading::build_thread_pool;

/// Transform `values` using `worker_count` workers over statically
/// pre-partitioned slices.
///
/// The elapsed time covers partitioning, dispatch, collection, and
/// concatenation; pool construction is setup and is excluded, matching
/// how the sequential baseline excludes generation.
pub fn run_parallel(values: &[NaiveDateTime], worker_count: usize) -> Result<TimedRun> {
    let pool = build_thread_pool(worker_count)?;

    let start = Instant::now();

    let plan = PartitionPlan::new(values.len(), worker_count);
    tracing::debug!(
        workers = worker_count,
        partitions = plan.partition_count(),
        chunk_size = plan.chunk_size(),
        "dispatching partitions"
    );

    // Indexed collect keeps partition order regardless of which worker
    // finishes first.
    let partitions: Vec<&[NaiveDateTime]> = plan.ranges().map(|r| &values[r]).collect();
    let transformed: Vec<Vec<NaiveDateTime>> = pool.install(|| {
        partitions
            .par_iter()
            .map(|chunk| chunk.iter().copied().map(shift_timestamp).collect())
            .collect()
    });

    let mut output = Vec::with_capacity(values.len());
    for chunk in transformed {
        output.extend(chunk);
    }

    let elapsed = start.elapsed();
    tracing::debug!(
        elements = output.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "parallel transform complete"
    );

    Ok(TimedRun {
        values: output,
        elapsed,
    })
}
