// Throughput from cumulative counters

use std::time::Instant;

/// Instantaneous rate from two cumulative counter readings.
///
/// `None` for `prev` means no baseline exists yet; that is defined as a rate
/// of 0, not an error. A non-positive `elapsed_secs` (same-timestamp double
/// sample) yields `None` ("unavailable") instead of dividing by zero.
/// Counters that went backwards (e.g. a counter reset) rate as 0.
pub fn throughput(prev: Option<u64>, curr: u64, elapsed_secs: f64) -> Option<f64> {
    match prev {
        None => Some(0.0),
        Some(p) if elapsed_secs > 0.0 => {
            Some(curr.saturating_sub(p) as f64 / elapsed_secs)
        }
        Some(_) => None,
    }
}

/// Single-slot memory cell for rate computation: the previous cumulative
/// counter value and its capture time. Owned exclusively by one monitor;
/// transitions from empty to populated on the first observation and never
/// returns to empty.
#[derive(Debug, Default)]
pub struct RateSample {
    last: Option<(u64, Instant)>,
}

impl RateSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a counter reading and return the rate against the previous one.
    pub fn observe(&mut self, counter: u64, now: Instant) -> Option<f64> {
        let rate = match self.last {
            None => Some(0.0),
            Some((prev, at)) => throughput(Some(prev), counter, now.duration_since(at).as_secs_f64()),
        };
        self.last = Some((counter, now));
        rate
    }
}
