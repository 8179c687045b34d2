//! # Partition Plan
//!
//! Static, contiguous partitioning of an ordered sequence for the worker
//! pool. The plan is computed once up front; there is no dynamic
//! rebalancing or work stealing.
//!
//! The chunk size is `len / worker_count` (integer division, clamped to at
//! least 1) and partitions advance by that fixed stride across the full
//! length. When `len` is not evenly divisible this leaves a shorter final
//! remainder partition, so the plan may hold more partitions than workers.
//! Together the partitions cover `0..len` exactly once, in order.

use std::ops::Range;

/// Contiguous, non-overlapping partitioning of `0..len`.
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    len: usize,
    chunk_size: usize,
}

impl PartitionPlan {
    /// Build a plan for a sequence of `len` elements and `worker_count`
    /// workers. `worker_count` must be >= 1.
    pub fn new(len: usize, worker_count: usize) -> Self {
        assert!(worker_count >= 1, "worker_count must be >= 1");
        let chunk_size = (len / worker_count).max(1);
        Self { len, chunk_size }
    }

    /// Fixed stride between partition starts
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of partitions in the plan (zero for an empty sequence)
    pub fn partition_count(&self) -> usize {
        self.len.div_ceil(self.chunk_size)
    }

    /// Iterate the partitions as half-open index ranges, in order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.len)
            .step_by(self.chunk_size)
            .map(move |start| start..(start + self.chunk_size).min(self.len))
    }
}
