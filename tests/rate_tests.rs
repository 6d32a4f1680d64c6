// Rate calculator properties: first poll, zero elapsed, counter resets

use hostmon::rate::{RateSample, throughput};
use std::time::{Duration, Instant};

#[test]
fn test_throughput_no_delta_is_zero() {
    assert_eq!(throughput(Some(100), 100, 1.0), Some(0.0));
}

#[test]
fn test_throughput_computes_bytes_per_sec() {
    assert_eq!(throughput(Some(100), 1100, 1.0), Some(1000.0));
    assert_eq!(throughput(Some(0), 5_000_000, 2.0), Some(2_500_000.0));
}

#[test]
fn test_throughput_without_baseline_is_zero() {
    assert_eq!(throughput(None, 12_345, 1.0), Some(0.0));
    assert_eq!(throughput(None, u64::MAX, 0.0), Some(0.0));
}

#[test]
fn test_throughput_non_positive_elapsed_is_unavailable() {
    assert_eq!(throughput(Some(100), 200, 0.0), None);
    assert_eq!(throughput(Some(100), 200, -1.0), None);
}

#[test]
fn test_throughput_counter_reset_rates_zero() {
    // Counter went backwards (e.g. reset); saturates instead of going negative.
    assert_eq!(throughput(Some(1000), 100, 1.0), Some(0.0));
}

#[test]
fn test_rate_sample_first_observation_is_zero() {
    let mut rate = RateSample::new();
    assert_eq!(rate.observe(5_000, Instant::now()), Some(0.0));
}

#[test]
fn test_rate_sample_sequencing() {
    let mut rate = RateSample::new();
    let t0 = Instant::now();
    rate.observe(100, t0);
    assert_eq!(rate.observe(1100, t0 + Duration::from_secs(1)), Some(1000.0));
    assert_eq!(rate.observe(1100, t0 + Duration::from_secs(2)), Some(0.0));
}

#[test]
fn test_rate_sample_same_instant_is_unavailable() {
    let mut rate = RateSample::new();
    let t0 = Instant::now();
    rate.observe(100, t0);
    assert_eq!(rate.observe(200, t0), None);
}
