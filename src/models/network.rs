// Network IO, connection and interface models

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Cumulative system-wide network IO counters since boot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetIoStat {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

/// Socket state. `None` is for connectionless sockets (UDP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnState {
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStat {
    /// Absent for socket families without an address.
    pub local_addr: Option<SocketAddr>,
    /// Absent for listening sockets with no remote peer.
    pub remote_addr: Option<SocketAddr>,
    pub state: ConnState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStat {
    pub name: String,
    pub mac_address: String,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
    /// Link speed in bits per second, 0 if unavailable.
    pub speed_bps: u64,
    pub is_up: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    pub io: NetIoStat,
    /// 0 on the first poll; absent when no elapsed time has passed.
    pub sent_bytes_per_sec: Option<f64>,
    pub recv_bytes_per_sec: Option<f64>,
    pub connections: Vec<ConnectionStat>,
    pub interfaces: Vec<InterfaceStat>,
}
