// Domain snapshot models

mod cpu;
mod memory;
mod network;
mod process;
mod storage;
mod system;

use serde::{Deserialize, Serialize};

pub use cpu::{CpuFrequency, CpuSnapshot};
pub use memory::{MemorySnapshot, RamStat, SwapStat};
pub use network::{ConnState, ConnectionStat, InterfaceStat, NetIoStat, NetworkSnapshot};
pub use process::{ProcessSnapshot, ProcessStat};
pub use storage::{DiskIoStat, PartitionStat, StorageSnapshot};
pub use system::{OsIdentity, SessionStat, SystemSnapshot};

/// One domain snapshot, tagged with the domain it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "data", rename_all = "camelCase")]
pub enum SnapshotEvent {
    Cpu(CpuSnapshot),
    Memory(MemorySnapshot),
    Storage(StorageSnapshot),
    Network(NetworkSnapshot),
    Process(ProcessSnapshot),
    System(SystemSnapshot),
}

/// Worker broadcast payload: a domain snapshot plus its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUpdate {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub event: SnapshotEvent,
}
