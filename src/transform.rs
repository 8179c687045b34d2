//! # Element Transform
//!
//! The pure per-element transformation both strategies apply: shift a
//! timestamp forward by a fixed duration (one hour).

use chrono::{Duration, NaiveDateTime};

/// Fixed shift applied to every element, in minutes.
pub const SHIFT_MINUTES: i64 = 60;

/// The fixed transform duration.
pub fn shift() -> Duration {
    Duration::minutes(SHIFT_MINUTES)
}

/// Shift one timestamp forward by the fixed duration. Pure; no side
/// effects, no failure modes for representable input.
#[inline]
pub fn shift_timestamp(t: NaiveDateTime) -> NaiveDateTime {
    t + shift()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_shift_adds_one_hour() {
        let t = NaiveDate::from_ymd_opt(1993, 12, 9)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        let shifted = shift_timestamp(t);
        assert_eq!(shifted, t + Duration::hours(1));
    }

    #[test]
    fn test_shift_crosses_midnight() {
        let t = NaiveDate::from_ymd_opt(1993, 12, 9)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let shifted = shift_timestamp(t);
        assert_eq!(
            shifted,
            NaiveDate::from_ymd_opt(1993, 12, 10)
                .unwrap()
                .and_hms_opt(0, 30, 0)
                .unwrap()
        );
    }
}
