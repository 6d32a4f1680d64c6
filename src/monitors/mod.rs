// Per-domain monitors over the OS query boundary

mod cpu;
mod memory;
mod network;
mod process;
mod storage;
mod system;

use std::sync::Arc;
use std::time::Duration;

use crate::host_query::HostQuery;

pub use cpu::CpuMonitor;
pub use memory::MemoryMonitor;
pub use network::NetworkMonitor;
pub use process::ProcessMonitor;
pub use storage::StorageMonitor;
pub use system::SystemMonitor;

/// The six domain monitors over one shared adapter.
///
/// Consumers that need the same domain's data should share one set (e.g.
/// behind the worker's broadcast channel) rather than construct a second
/// one: duplicating the rate-bearing monitors desynchronizes their
/// throughput baselines.
pub struct MonitorSet<Q> {
    pub cpu: CpuMonitor<Q>,
    pub memory: MemoryMonitor<Q>,
    pub storage: StorageMonitor<Q>,
    pub network: NetworkMonitor<Q>,
    pub process: ProcessMonitor<Q>,
    pub system: SystemMonitor<Q>,
}

impl<Q: HostQuery> MonitorSet<Q> {
    pub fn new(query: Arc<Q>, cpu_sample_interval: Duration) -> Self {
        Self {
            cpu: CpuMonitor::new(query.clone(), cpu_sample_interval),
            memory: MemoryMonitor::new(query.clone()),
            storage: StorageMonitor::new(query.clone()),
            network: NetworkMonitor::new(query.clone()),
            process: ProcessMonitor::new(query.clone()),
            system: SystemMonitor::new(query),
        }
    }
}
