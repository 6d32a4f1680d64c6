// System monitor: boot time, sessions, OS identity

use std::sync::Arc;

use crate::host_query::HostQuery;
use crate::models::SystemSnapshot;

pub struct SystemMonitor<Q> {
    query: Arc<Q>,
}

impl<Q: HostQuery> SystemMonitor<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self { query }
    }

    pub fn sample(&self) -> anyhow::Result<SystemSnapshot> {
        Ok(SystemSnapshot {
            boot_time_secs: self.query.boot_time()?,
            sessions: self.query.sessions()?,
            os: self.query.os_identity(),
        })
    }
}
