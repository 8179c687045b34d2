//! # Chronobench Library Root
//!
//! Benchmark core: generate a large ordered series of timestamps, apply a
//! pure per-element transform (+1 hour) once sequentially and once via
//! statically partitioned workers, and time both strategies. Both paths
//! must produce value-identical output in the same order.
//!
//! ## Module Structure
//! ```text
//! chronobench
//! ├── config     # CLI parsing and validation
//! ├── data       # Timestamp series and partition plan
//! ├── error      # Centralized error types
//! ├── pipelines  # Sequential and parallel strategies
//! ├── transform  # The pure per-element transform
//! └── utils      # Threading and report formatting
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod pipelines;
pub mod transform;
pub mod utils;
