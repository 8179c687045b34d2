//! # Timestamp Series
//!
//! Ordered in-memory sequence of timestamps generated by repeated addition
//! of a fixed step. Order is significant: `element[i] == element[i-1] + step`
//! for all `i > 0`, and `element[0] == start + step`.

use chrono::{Duration, NaiveDateTime};

use crate::error::{BenchError, Result};

/// Ordered sequence of timestamps, immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampSeries {
    values: Vec<NaiveDateTime>,
}

impl TimestampSeries {
    /// Generate `count` timestamps starting at `start + step`, each element
    /// one `step` after the previous.
    ///
    /// Deterministic. Fails only if the running timestamp leaves chrono's
    /// representable range, reporting the index of the element that could
    /// not be produced.
    pub fn generate(start: NaiveDateTime, step: Duration, count: usize) -> Result<Self> {
        let mut values = Vec::with_capacity(count);
        let mut current = start;
        for i in 0..count {
            current = current.checked_add_signed(step).ok_or_else(|| {
                BenchError::generation(i, format!("timestamp overflow adding {step} to {current}"))
            })?;
            values.push(current);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[NaiveDateTime] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<NaiveDateTime> {
        self.values
    }
}
