//! # Configuration Logic
//!
//! CLI argument parsing and validation. All benchmark parameters that were
//! implicit script-level constants become explicit, overridable flags here.

use chrono::NaiveDateTime;
use clap::Parser;

use crate::error::{BenchError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Benchmark configuration
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chronobench",
    about = "Compare sequential vs. partitioned-parallel timestamp transformation"
)]
pub struct Config {
    /// Series origin; the first generated element is start + step
    #[arg(long, value_parser = parse_timestamp, default_value = "1993-12-09T00:00:00")]
    pub start: NaiveDateTime,

    /// Step between consecutive elements, in minutes
    #[arg(long, default_value_t = 60)]
    pub step_minutes: i64,

    /// Number of elements to generate
    ///
    /// Parsed signed so a negative value reaches validation and produces a
    /// clear error instead of a CLI type error.
    #[arg(long, default_value_t = 2_000_000)]
    pub count: i64,

    /// Worker count for the parallel strategy (0 = all available cores)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| format!("invalid timestamp {s:?} (expected {TIMESTAMP_FORMAT}): {e}"))
}

impl Config {
    /// Parse CLI arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check preconditions before any generation or timing begins
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(BenchError::config(format!(
                "count must be non-negative, got {}",
                self.count
            )));
        }
        if self.step_minutes == 0 {
            return Err(BenchError::config("step-minutes must be non-zero"));
        }
        Ok(())
    }

    /// Validated element count
    pub fn element_count(&self) -> usize {
        debug_assert!(self.count >= 0);
        self.count as usize
    }

    /// Step duration between consecutive elements
    pub fn step(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.step_minutes)
    }

    /// Effective worker pool size: configured value, or all host cores
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn base_config() -> Config {
        Config {
            start: NaiveDate::from_ymd_opt(1993, 12, 9)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
            step_minutes: 60,
            count: 100,
            threads: 0,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut config = base_config();
        config.count = -1;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BenchError::Config { .. }));
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut config = base_config();
        config.step_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_worker_count_at_least_one() {
        let config = base_config();
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_explicit_worker_count() {
        let mut config = base_config();
        config.threads = 3;
        assert_eq!(config.worker_count(), 3);
    }

    #[test]
    fn test_parse_timestamp() {
        let t = parse_timestamp("1993-12-09T00:00:00").unwrap();
        assert_eq!(t.format("%Y-%m-%d %H:%M").to_string(), "1993-12-09 00:00");
        assert!(parse_timestamp("not-a-date").is_err());
    }
}
