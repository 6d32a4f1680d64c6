// Partition and disk IO models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionStat {
    /// Device identifier; unique within one snapshot's partition list.
    pub device: String,
    pub mount: String,
    pub fstype: String,
    pub total_space: u64,
    pub used_space: u64,
    pub free_space: u64,
    pub usage_percent: f64,
}

/// Cumulative system-wide disk IO counters since boot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskIoStat {
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_ops: u64,
    pub write_ops: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSnapshot {
    pub partitions: Vec<PartitionStat>,
    /// Absent on platforms without system-wide disk counters.
    pub io: Option<DiskIoStat>,
    /// 0 on the first poll; absent when no elapsed time or no counters.
    pub read_bytes_per_sec: Option<f64>,
    pub write_bytes_per_sec: Option<f64>,
}
