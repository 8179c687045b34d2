//! # Data Module
//!
//! In-memory representations of the benchmark dataset: the ordered
//! timestamp series and the contiguous partition plan that splits it
//! across workers.

pub mod partition;
pub mod series;

pub use partition::PartitionPlan;
pub use series::TimestampSeries;
