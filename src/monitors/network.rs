// Network monitor: IO throughput + connection and interface enumeration

use std::sync::Arc;
use std::time::Instant;

use crate::host_query::HostQuery;
use crate::models::NetworkSnapshot;
use crate::rate::RateSample;

pub struct NetworkMonitor<Q> {
    query: Arc<Q>,
    sent_rate: RateSample,
    recv_rate: RateSample,
}

impl<Q: HostQuery> NetworkMonitor<Q> {
    pub fn new(query: Arc<Q>) -> Self {
        Self {
            query,
            sent_rate: RateSample::new(),
            recv_rate: RateSample::new(),
        }
    }

    pub fn sample(&mut self) -> anyhow::Result<NetworkSnapshot> {
        self.sample_at(Instant::now())
    }

    /// Like [`NetworkMonitor::sample`], with an explicit capture time.
    ///
    /// Rate state is only advanced after every adapter query has succeeded,
    /// so a failed poll leaves the throughput baseline intact.
    pub fn sample_at(&mut self, now: Instant) -> anyhow::Result<NetworkSnapshot> {
        let io = self.query.net_io()?;
        let connections = self.query.connections()?;
        let interfaces = self.query.interfaces()?;

        let sent_bytes_per_sec = self.sent_rate.observe(io.bytes_sent, now);
        let recv_bytes_per_sec = self.recv_rate.observe(io.bytes_recv, now);

        Ok(NetworkSnapshot {
            io,
            sent_bytes_per_sec,
            recv_bytes_per_sec,
            connections,
            interfaces,
        })
    }
}
