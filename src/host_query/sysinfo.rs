// Host metrics via sysinfo + netstat2

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Mutex;

use netstat2::{AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo, TcpState};
use sysinfo::{Disks, Networks, ProcessesToUpdate, System};
use tracing::instrument;

use super::linux;
use super::{CoreCounts, CpuUsage, HostQuery, PartitionEntry, QueryError, UsageStat};
use crate::models::{
    ConnState, ConnectionStat, CpuFrequency, DiskIoStat, InterfaceStat, NetIoStat, OsIdentity,
    ProcessStat, RamStat, SessionStat, SwapStat,
};

pub struct SysinfoQuery {
    sys: Mutex<System>,
    disks: Mutex<Disks>,
    networks: Mutex<Networks>,
}

impl Default for SysinfoQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoQuery {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            disks: Mutex::new(Disks::new_with_refreshed_list()),
            networks: Mutex::new(Networks::new_with_refreshed_list()),
        }
    }

    fn lock_sys(&self) -> Result<std::sync::MutexGuard<'_, System>, QueryError> {
        self.sys
            .lock()
            .map_err(|_| QueryError::LockPoisoned("sysinfo system"))
    }

    fn lock_disks(&self) -> Result<std::sync::MutexGuard<'_, Disks>, QueryError> {
        self.disks
            .lock()
            .map_err(|_| QueryError::LockPoisoned("sysinfo disks"))
    }

    fn lock_networks(&self) -> Result<std::sync::MutexGuard<'_, Networks>, QueryError> {
        self.networks
            .lock()
            .map_err(|_| QueryError::LockPoisoned("sysinfo networks"))
    }
}

fn conn_state(state: &TcpState) -> ConnState {
    match state {
        TcpState::Established => ConnState::Established,
        TcpState::SynSent => ConnState::SynSent,
        TcpState::SynReceived => ConnState::SynRecv,
        TcpState::FinWait1 => ConnState::FinWait1,
        TcpState::FinWait2 => ConnState::FinWait2,
        TcpState::TimeWait => ConnState::TimeWait,
        TcpState::Closed => ConnState::Close,
        TcpState::CloseWait => ConnState::CloseWait,
        TcpState::LastAck => ConnState::LastAck,
        TcpState::Listen => ConnState::Listen,
        TcpState::Closing => ConnState::Closing,
        _ => ConnState::None,
    }
}

impl HostQuery for SysinfoQuery {
    #[instrument(skip(self), fields(adapter = "sysinfo", operation = "cpu_usage"))]
    fn cpu_usage(&self) -> Result<CpuUsage, QueryError> {
        let mut sys = self.lock_sys()?;
        sys.refresh_cpu_all();
        let total_percent = (sys.global_cpu_usage() as f64).clamp(0.0, 100.0);
        let per_core_percent = sys
            .cpus()
            .iter()
            .map(|c| (c.cpu_usage() as f64).clamp(0.0, 100.0))
            .collect();
        Ok(CpuUsage {
            total_percent,
            per_core_percent,
        })
    }

    fn cpu_frequency(&self) -> Option<CpuFrequency> {
        if let Some(freq) = linux::read_cpu_freq_linux() {
            return Some(freq);
        }
        let sys = self.sys.lock().ok()?;
        let mhz = sys.cpus().first().map(|c| c.frequency())?;
        if mhz == 0 {
            return None;
        }
        Some(CpuFrequency {
            current_mhz: mhz as f64,
            min_mhz: None,
            max_mhz: None,
        })
    }

    fn core_counts(&self) -> Result<CoreCounts, QueryError> {
        let sys = self.lock_sys()?;
        Ok(CoreCounts {
            physical: System::physical_core_count().map(|c| c as u32),
            logical: sys.cpus().len() as u32,
        })
    }

    fn memory(&self) -> Result<RamStat, QueryError> {
        let mut sys = self.lock_sys()?;
        sys.refresh_memory();
        let total = sys.total_memory();
        let available = sys.available_memory();
        let used = total.saturating_sub(available);
        let percent = if total > 0 {
            (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Ok(RamStat {
            total,
            used,
            available,
            free: sys.free_memory(),
            percent,
        })
    }

    fn swap(&self) -> Result<Option<SwapStat>, QueryError> {
        let mut sys = self.lock_sys()?;
        sys.refresh_memory();
        let total = sys.total_swap();
        if total == 0 {
            return Ok(None);
        }
        let used = sys.used_swap();
        Ok(Some(SwapStat {
            total,
            used,
            free: sys.free_swap(),
            percent: (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0),
        }))
    }

    #[instrument(skip(self), fields(adapter = "sysinfo", operation = "partitions"))]
    fn partitions(&self) -> Result<Vec<PartitionEntry>, QueryError> {
        let mut disks = self.lock_disks()?;
        disks.refresh(false);
        Ok(disks
            .list()
            .iter()
            .map(|d| PartitionEntry {
                device: d.name().to_string_lossy().into_owned(),
                mount: d.mount_point().to_string_lossy().into_owned(),
                fstype: d.file_system().to_string_lossy().into_owned(),
            })
            .collect())
    }

    fn partition_usage(&self, mount: &str) -> Result<UsageStat, QueryError> {
        let disks = self.lock_disks()?;
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new(mount))
            .ok_or_else(|| QueryError::Backend(format!("no partition mounted at {}", mount)))?;
        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);
        let percent = if total > 0 {
            (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Ok(UsageStat {
            total,
            used,
            free,
            percent,
        })
    }

    fn disk_io(&self) -> Result<Option<DiskIoStat>, QueryError> {
        Ok(linux::read_disk_io_linux())
    }

    #[instrument(skip(self), fields(adapter = "sysinfo", operation = "net_io"))]
    fn net_io(&self) -> Result<NetIoStat, QueryError> {
        let mut networks = self.lock_networks()?;
        networks.refresh(true);
        let mut io = NetIoStat {
            bytes_sent: 0,
            bytes_recv: 0,
            packets_sent: 0,
            packets_recv: 0,
        };
        for data in networks.list().values() {
            io.bytes_sent += data.total_transmitted();
            io.bytes_recv += data.total_received();
            io.packets_sent += data.total_packets_transmitted();
            io.packets_recv += data.total_packets_received();
        }
        Ok(io)
    }

    #[instrument(skip(self), fields(adapter = "netstat2", operation = "connections"))]
    fn connections(&self) -> Result<Vec<ConnectionStat>, QueryError> {
        let af = AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6;
        let proto = ProtocolFlags::TCP | ProtocolFlags::UDP;
        let sockets = netstat2::get_sockets_info(af, proto)
            .map_err(|e| QueryError::Backend(format!("socket table: {}", e)))?;
        Ok(sockets
            .iter()
            .map(|si| match &si.protocol_socket_info {
                ProtocolSocketInfo::Tcp(tcp) => {
                    let remote = if tcp.remote_addr.is_unspecified() && tcp.remote_port == 0 {
                        None
                    } else {
                        Some(SocketAddr::new(tcp.remote_addr, tcp.remote_port))
                    };
                    ConnectionStat {
                        local_addr: Some(SocketAddr::new(tcp.local_addr, tcp.local_port)),
                        remote_addr: remote,
                        state: conn_state(&tcp.state),
                    }
                }
                ProtocolSocketInfo::Udp(udp) => ConnectionStat {
                    local_addr: Some(SocketAddr::new(udp.local_addr, udp.local_port)),
                    remote_addr: None,
                    state: ConnState::None,
                },
            })
            .collect())
    }

    fn interfaces(&self) -> Result<Vec<InterfaceStat>, QueryError> {
        let mut networks = self.lock_networks()?;
        networks.refresh(true);
        Ok(networks
            .list()
            .iter()
            .map(|(name, data)| InterfaceStat {
                name: name.clone(),
                mac_address: data.mac_address().to_string(),
                ipv4: data
                    .ip_networks()
                    .iter()
                    .filter(|n| n.addr.is_ipv4())
                    .map(|n| n.addr.to_string())
                    .collect(),
                ipv6: data
                    .ip_networks()
                    .iter()
                    .filter(|n| n.addr.is_ipv6())
                    .map(|n| n.addr.to_string())
                    .collect(),
                speed_bps: linux::read_interface_speed(name),
                is_up: linux::read_interface_is_up(name).unwrap_or(true),
            })
            .collect())
    }

    #[instrument(skip(self), fields(adapter = "sysinfo", operation = "processes"))]
    fn processes(&self) -> Result<Vec<ProcessStat>, QueryError> {
        let mut sys = self.lock_sys()?;
        sys.refresh_processes(ProcessesToUpdate::All, true);
        let total_memory = sys.total_memory();
        let mut processes: Vec<ProcessStat> = sys
            .processes()
            .values()
            .map(|p| {
                let memory_percent = if total_memory > 0 {
                    (p.memory() as f64 / total_memory as f64 * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };
                ProcessStat {
                    pid: p.pid().as_u32(),
                    name: p.name().to_string_lossy().into_owned(),
                    cpu_percent: (p.cpu_usage() as f64).clamp(0.0, 100.0),
                    memory_percent,
                }
            })
            .collect();
        processes.sort_unstable_by_key(|p| p.pid);
        Ok(processes)
    }

    fn pid_count(&self) -> Result<u32, QueryError> {
        if let Some(count) = linux::read_pid_count_linux() {
            return Ok(count);
        }
        let sys = self.lock_sys()?;
        Ok(sys.processes().len() as u32)
    }

    fn boot_time(&self) -> Result<u64, QueryError> {
        Ok(System::boot_time())
    }

    fn sessions(&self) -> Result<Vec<SessionStat>, QueryError> {
        Ok(linux::read_sessions_linux().unwrap_or_default())
    }

    fn os_identity(&self) -> OsIdentity {
        OsIdentity {
            system: System::name().unwrap_or_else(|| std::env::consts::OS.into()),
            release: System::kernel_version().unwrap_or_default(),
            version: System::os_version().unwrap_or_default(),
            machine: System::cpu_arch(),
        }
    }
}
