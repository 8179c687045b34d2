//! # Threading Configuration
//!
//! Rayon thread pool construction for the parallel strategy. The pool is
//! fixed-size; partitions are assigned statically and workers never
//! communicate with each other.

use crate::error::{BenchError, Result};

/// Create a configured thread pool with `n_threads` workers.
pub fn build_thread_pool(n_threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("chronobench-worker-{}", i))
        .build()
        .map_err(|e| BenchError::threading(format!("failed to create thread pool: {}", e)))
}
