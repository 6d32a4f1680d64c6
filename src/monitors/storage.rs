// Storage monitor: partition enumeration + disk IO throughput

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::host_query::HostQuery;
use crate::models::{PartitionStat, StorageSnapshot};
use crate::rate::RateSample;

pub struct StorageMonitor<Q> {
    query: Arc<Q>,
    read_rate: RateSample,
    write_rate: RateSample,
}

impl<Q: HostQuery> StorageMonitor<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self {
            query,
            read_rate: RateSample::new(),
            write_rate: RateSample::new(),
        }
    }

    pub fn sample(&mut self) -> anyhow::Result<StorageSnapshot> {
        self.sample_at(Instant::now())
    }

    /// Like [`StorageMonitor::sample`], with an explicit capture time.
    ///
    /// A partition whose usage lookup fails (unmounted or inaccessible
    /// removable media) is skipped, never aborts the call. Rate state is
    /// only advanced after every adapter query has succeeded, so a failed
    /// poll leaves the throughput baseline intact.
    pub fn sample_at(&mut self, now: Instant) -> anyhow::Result<StorageSnapshot> {
        let entries = self.query.partitions()?;
        let io = self.query.disk_io()?;

        let mut seen = HashSet::new();
        let mut partitions = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.contains(&entry.device) {
                continue;
            }
            match self.query.partition_usage(&entry.mount) {
                Ok(usage) => {
                    seen.insert(entry.device.clone());
                    partitions.push(PartitionStat {
                        device: entry.device,
                        mount: entry.mount,
                        fstype: entry.fstype,
                        total_space: usage.total,
                        used_space: usage.used,
                        free_space: usage.free,
                        usage_percent: usage.percent.clamp(0.0, 100.0),
                    });
                }
                Err(e) => {
                    tracing::debug!(
                        mount = %entry.mount,
                        error = %e,
                        "partition usage lookup failed, skipping"
                    );
                }
            }
        }

        let (read_bytes_per_sec, write_bytes_per_sec) = match io {
            Some(io) => (
                self.read_rate.observe(io.read_bytes, now),
                self.write_rate.observe(io.write_bytes, now),
            ),
            None => (None, None),
        };

        Ok(StorageSnapshot {
            partitions,
            io,
            read_bytes_per_sec,
            write_bytes_per_sec,
        })
    }
}
