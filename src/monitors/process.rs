// Process monitor: table enumeration + independent pid count

use std::sync::Arc;

use crate::host_query::HostQuery;
use crate::models::ProcessSnapshot;

pub struct ProcessMonitor<Q> {
    query: Arc<Q>,
}

impl<Q: HostQuery> ProcessMonitor<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self { query }
    }

    /// The pid count and the table enumeration are two separate,
    /// non-atomic OS calls; under process churn the count (captured first)
    /// can differ from the listed length. That divergence is expected.
    pub fn sample(&self) -> anyhow::Result<ProcessSnapshot> {
        let total_count = self.query.pid_count()?;
        let mut processes = self.query.processes()?;
        for p in &mut processes {
            p.cpu_percent = p.cpu_percent.clamp(0.0, 100.0);
            p.memory_percent = p.memory_percent.clamp(0.0, 100.0);
        }
        Ok(ProcessSnapshot {
            processes,
            total_count,
        })
    }
}
