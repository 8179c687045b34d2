//! End-to-end equivalence between the sequential baseline and the
//! partitioned parallel strategy, over the generated series.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chronobench::data::{PartitionPlan, TimestampSeries};
use chronobench::pipelines::{run_parallel, run_sequential};
use chronobench::transform::shift_timestamp;

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1993, 12, 9)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn parallel_equals_sequential_across_worker_counts() {
    let series = TimestampSeries::generate(epoch(), Duration::minutes(60), 10_000).unwrap();
    let baseline = run_sequential(series.as_slice());

    for workers in [1, 2, 3, 4, 7, 16] {
        let parallel = run_parallel(series.as_slice(), workers).unwrap();
        assert_eq!(
            parallel.values, baseline.values,
            "output diverged with {workers} workers"
        );
    }
}

#[test]
fn parallel_equals_sequential_on_awkward_lengths() {
    // Lengths chosen so len % workers != 0 and len < workers both occur
    for count in [1, 2, 5, 10, 97, 1001] {
        let series = TimestampSeries::generate(epoch(), Duration::minutes(60), count).unwrap();
        let baseline = run_sequential(series.as_slice());
        for workers in [1, 3, 8, 64] {
            let parallel = run_parallel(series.as_slice(), workers).unwrap();
            assert_eq!(
                parallel.values, baseline.values,
                "count = {count}, workers = {workers}"
            );
        }
    }
}

#[test]
fn empty_series_yields_empty_results() {
    let series = TimestampSeries::generate(epoch(), Duration::minutes(60), 0).unwrap();
    assert!(series.is_empty());

    let sequential = run_sequential(series.as_slice());
    let parallel = run_parallel(series.as_slice(), 4).unwrap();
    assert!(sequential.values.is_empty());
    assert!(parallel.values.is_empty());
}

#[test]
fn reference_scenario_five_elements() {
    // start = 1993-12-09T00:00, step = 1h, count = 5
    // generated: 01:00 .. 05:00; transformed: 02:00 .. 06:00
    let series = TimestampSeries::generate(epoch(), Duration::hours(1), 5).unwrap();
    let expected_generated: Vec<NaiveDateTime> =
        (1..=5).map(|h| epoch() + Duration::hours(h)).collect();
    assert_eq!(series.as_slice(), expected_generated.as_slice());

    let expected_transformed: Vec<NaiveDateTime> =
        (2..=6).map(|h| epoch() + Duration::hours(h)).collect();

    let sequential = run_sequential(series.as_slice());
    assert_eq!(sequential.values, expected_transformed);

    let parallel = run_parallel(series.as_slice(), 2).unwrap();
    assert_eq!(parallel.values, expected_transformed);
}

#[test]
fn ten_elements_three_workers_scenario() {
    // chunk_size = 3; stride partitioning covers indices 0..10 exactly once
    let plan = PartitionPlan::new(10, 3);
    assert_eq!(plan.chunk_size(), 3);
    let covered: Vec<usize> = plan.ranges().flatten().collect();
    assert_eq!(covered, (0..10).collect::<Vec<_>>());

    let series = TimestampSeries::generate(epoch(), Duration::minutes(60), 10).unwrap();
    let baseline = run_sequential(series.as_slice());
    let parallel = run_parallel(series.as_slice(), 3).unwrap();
    assert_eq!(parallel.values, baseline.values);
}

#[test]
fn transform_is_plain_hour_shift() {
    let series = TimestampSeries::generate(epoch(), Duration::minutes(60), 100).unwrap();
    let run = run_sequential(series.as_slice());
    for (before, after) in series.as_slice().iter().zip(&run.values) {
        assert_eq!(*after, shift_timestamp(*before));
        assert_eq!(*after - *before, Duration::hours(1));
    }
}
