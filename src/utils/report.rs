//! # Timing Reports
//!
//! Human-readable formatting for the per-strategy timing lines printed to
//! stdout, plus throughput for context.

use std::time::Duration;

/// One strategy's report line, e.g.
/// `Without partitioned workers: 0.142 seconds (14.1M elements/s)`.
pub fn strategy_line(label: &str, elapsed: Duration, elements: usize) -> String {
    let secs = elapsed.as_secs_f64();
    format!(
        "{}: {:.3} seconds ({})",
        label,
        secs,
        format_throughput(elements, secs)
    )
}

fn format_throughput(elements: usize, secs: f64) -> String {
    if secs <= 0.0 {
        return "n/a".to_string();
    }
    let rate = elements as f64 / secs;
    if rate >= 1_000_000.0 {
        format!("{:.1}M elements/s", rate / 1_000_000.0)
    } else if rate >= 1_000.0 {
        format!("{:.1}K elements/s", rate / 1_000.0)
    } else {
        format!("{:.0} elements/s", rate)
    }
}

/// Format duration in human-readable form
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{:.0}m{:.0}s", mins, remaining_secs)
    } else {
        format!("{:.1}h", secs / 3600.0)
    }
}
