// CPU monitor: interval-cached utilization sampling

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::host_query::{CpuUsage, HostQuery};
use crate::models::CpuSnapshot;

/// Samples CPU utilization over a fixed measurement interval.
///
/// OS-level CPU percent is itself computed across an interval, so the
/// monitor keeps the last measurement and its capture time. A poll arriving
/// before `sample_interval` has elapsed returns the cached utilization
/// instead of blocking the caller for the remainder (non-blocking policy;
/// the alternative would couple the caller's refresh cadence to the
/// measurement interval). Frequency and core counts are re-queried on every
/// poll.
pub struct CpuMonitor<Q> {
    query: Arc<Q>,
    sample_interval: Duration,
    last: Option<(Instant, CpuUsage)>,
}

impl<Q: HostQuery> CpuMonitor<Q> {
    pub fn new(query: Arc<Q>, sample_interval: Duration) -> Self {
        Self {
            query,
            sample_interval: sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
            last: None,
        }
    }

    pub fn sample(&mut self) -> anyhow::Result<CpuSnapshot> {
        self.sample_at(Instant::now())
    }

    /// Like [`CpuMonitor::sample`], with an explicit capture time.
    pub fn sample_at(&mut self, now: Instant) -> anyhow::Result<CpuSnapshot> {
        let usage = match &self.last {
            Some((at, cached)) if now.duration_since(*at) < self.sample_interval => cached.clone(),
            _ => {
                let fresh = self.query.cpu_usage()?;
                self.last = Some((now, fresh.clone()));
                fresh
            }
        };
        let counts = self.query.core_counts()?;
        let mut per_core_percent = usage.per_core_percent;
        per_core_percent.resize(counts.logical as usize, 0.0);
        for p in &mut per_core_percent {
            *p = p.clamp(0.0, 100.0);
        }
        // Unreported physical core count is treated as 1, not 0.
        let threads_per_core = counts.logical / counts.physical.unwrap_or(1).max(1);
        Ok(CpuSnapshot {
            total_percent: usage.total_percent.clamp(0.0, 100.0),
            per_core_percent,
            frequency: self.query.cpu_frequency(),
            physical_cores: counts.physical,
            logical_cores: counts.logical,
            threads_per_core,
        })
    }
}
