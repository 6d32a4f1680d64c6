// OS query boundary: capability trait over host metrics

mod linux;
mod sysinfo;

use crate::models::{
    ConnectionStat, CpuFrequency, DiskIoStat, InterfaceStat, NetIoStat, OsIdentity, ProcessStat,
    RamStat, SessionStat, SwapStat,
};

pub use self::sysinfo::SysinfoQuery;

/// Adapter-level failure: the OS query itself failed, as opposed to a single
/// enumerated item being unreadable (those are skipped, never surfaced here).
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
    #[error("{0}")]
    Backend(String),
}

/// CPU utilization since the previous refresh.
#[derive(Debug, Clone)]
pub struct CpuUsage {
    pub total_percent: f64,
    pub per_core_percent: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct CoreCounts {
    /// Absent when the OS does not report physical cores.
    pub physical: Option<u32>,
    pub logical: u32,
}

/// A mounted partition as enumerated, before its usage lookup.
#[derive(Debug, Clone)]
pub struct PartitionEntry {
    pub device: String,
    pub mount: String,
    pub fstype: String,
}

/// Mount-point-scoped usage counters.
#[derive(Debug, Clone, Copy)]
pub struct UsageStat {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

/// Read-only, synchronous queries over OS-exposed metrics.
///
/// Every method is side-effect-free from the caller's perspective. Methods
/// that enumerate (connections, processes) are per-item fault tolerant: an
/// element that fails to read is dropped from the result, and only a failure
/// of the enumeration itself returns `Err`. Metrics a platform cannot report
/// come back as `None`, never as a zero sentinel.
pub trait HostQuery: Send + Sync {
    // CPU
    fn cpu_usage(&self) -> Result<CpuUsage, QueryError>;
    fn cpu_frequency(&self) -> Option<CpuFrequency>;
    fn core_counts(&self) -> Result<CoreCounts, QueryError>;

    // Memory
    fn memory(&self) -> Result<RamStat, QueryError>;
    fn swap(&self) -> Result<Option<SwapStat>, QueryError>;

    // Storage
    fn partitions(&self) -> Result<Vec<PartitionEntry>, QueryError>;
    /// Usage for one mount point; fails individually for inaccessible mounts.
    fn partition_usage(&self, mount: &str) -> Result<UsageStat, QueryError>;
    fn disk_io(&self) -> Result<Option<DiskIoStat>, QueryError>;

    // Network
    fn net_io(&self) -> Result<NetIoStat, QueryError>;
    fn connections(&self) -> Result<Vec<ConnectionStat>, QueryError>;
    fn interfaces(&self) -> Result<Vec<InterfaceStat>, QueryError>;

    // Process
    fn processes(&self) -> Result<Vec<ProcessStat>, QueryError>;
    /// Pid count from an independent listing; under churn this may not match
    /// the length of a `processes()` result captured around the same time.
    fn pid_count(&self) -> Result<u32, QueryError>;

    // System
    fn boot_time(&self) -> Result<u64, QueryError>;
    fn sessions(&self) -> Result<Vec<SessionStat>, QueryError>;
    fn os_identity(&self) -> OsIdentity;
}
