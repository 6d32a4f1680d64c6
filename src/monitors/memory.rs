// Memory monitor: stateless pass-through of OS counters

use std::sync::Arc;

use crate::host_query::HostQuery;
use crate::models::MemorySnapshot;

pub struct MemoryMonitor<Q> {
    query: Arc<Q>,
}

impl<Q: HostQuery> MemoryMonitor<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self { query }
    }

    /// Percent fields come from the adapter as the OS accounts them (cached
    /// and buffer treatment varies by platform); they are not recomputed
    /// here, only bounded to [0, 100].
    pub fn sample(&self) -> anyhow::Result<MemorySnapshot> {
        let mut ram = self.query.memory()?;
        ram.percent = ram.percent.clamp(0.0, 100.0);
        let swap = self.query.swap()?.map(|mut s| {
            s.percent = s.percent.clamp(0.0, 100.0);
            s
        });
        Ok(MemorySnapshot { ram, swap })
    }
}
