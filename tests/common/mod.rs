#![allow(dead_code)]
// Shared test helpers: an injectable HostQuery fake

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use hostmon::host_query::{CoreCounts, CpuUsage, HostQuery, PartitionEntry, QueryError, UsageStat};
use hostmon::models::{
    ConnState, ConnectionStat, CpuFrequency, DiskIoStat, InterfaceStat, NetIoStat, OsIdentity,
    ProcessStat, RamStat, SessionStat, SwapStat,
};

pub struct FakeState {
    pub cpu_total: f64,
    pub cpu_per_core: Vec<f64>,
    pub frequency: Option<CpuFrequency>,
    pub physical_cores: Option<u32>,
    pub logical_cores: u32,
    pub ram: RamStat,
    pub swap: Option<SwapStat>,
    pub partitions: Vec<PartitionEntry>,
    pub usage: HashMap<String, UsageStat>,
    pub failing_mounts: HashSet<String>,
    pub disk_io: Option<DiskIoStat>,
    pub net_io: NetIoStat,
    pub net_io_error: bool,
    pub connections: Vec<ConnectionStat>,
    pub interfaces: Vec<InterfaceStat>,
    pub processes: Vec<ProcessStat>,
    pub pid_count: u32,
    pub boot_time_secs: u64,
    pub sessions: Vec<SessionStat>,
    pub os: OsIdentity,
}

/// In-memory HostQuery whose state tests mutate between polls.
pub struct FakeQuery {
    state: Mutex<FakeState>,
}

impl FakeQuery {
    pub fn new() -> Self {
        let mut usage = HashMap::new();
        usage.insert(
            "/".to_string(),
            UsageStat {
                total: 100_000_000_000,
                used: 40_000_000_000,
                free: 60_000_000_000,
                percent: 40.0,
            },
        );
        usage.insert(
            "/data".to_string(),
            UsageStat {
                total: 500_000_000_000,
                used: 250_000_000_000,
                free: 250_000_000_000,
                percent: 50.0,
            },
        );
        usage.insert(
            "/mnt/usb".to_string(),
            UsageStat {
                total: 8_000_000_000,
                used: 1_000_000_000,
                free: 7_000_000_000,
                percent: 12.5,
            },
        );

        let state = FakeState {
            cpu_total: 12.5,
            cpu_per_core: vec![10.0, 15.0, 12.0, 13.0],
            frequency: Some(CpuFrequency {
                current_mhz: 2400.0,
                min_mhz: Some(800.0),
                max_mhz: Some(4200.0),
            }),
            physical_cores: Some(2),
            logical_cores: 4,
            ram: RamStat {
                total: 8_000_000_000,
                used: 4_000_000_000,
                available: 4_000_000_000,
                free: 3_000_000_000,
                percent: 50.0,
            },
            swap: Some(SwapStat {
                total: 2_000_000_000,
                used: 500_000_000,
                free: 1_500_000_000,
                percent: 25.0,
            }),
            partitions: vec![
                PartitionEntry {
                    device: "/dev/sda1".into(),
                    mount: "/".into(),
                    fstype: "ext4".into(),
                },
                PartitionEntry {
                    device: "/dev/sdb1".into(),
                    mount: "/data".into(),
                    fstype: "xfs".into(),
                },
                PartitionEntry {
                    device: "/dev/sdc1".into(),
                    mount: "/mnt/usb".into(),
                    fstype: "vfat".into(),
                },
            ],
            usage,
            failing_mounts: HashSet::new(),
            disk_io: Some(DiskIoStat {
                read_bytes: 1_000_000,
                write_bytes: 2_000_000,
                read_ops: 100,
                write_ops: 200,
            }),
            net_io: NetIoStat {
                bytes_sent: 0,
                bytes_recv: 0,
                packets_sent: 0,
                packets_recv: 0,
            },
            net_io_error: false,
            connections: vec![ConnectionStat {
                local_addr: Some("127.0.0.1:8080".parse().unwrap()),
                remote_addr: None,
                state: ConnState::Listen,
            }],
            interfaces: vec![InterfaceStat {
                name: "eth0".into(),
                mac_address: "00:11:22:33:44:55".into(),
                ipv4: vec!["192.168.1.10".into()],
                ipv6: vec!["fe80::1".into()],
                speed_bps: 1_000_000_000,
                is_up: true,
            }],
            processes: vec![
                ProcessStat {
                    pid: 1,
                    name: "init".into(),
                    cpu_percent: 0.1,
                    memory_percent: 0.5,
                },
                ProcessStat {
                    pid: 999,
                    name: "hostmon".into(),
                    cpu_percent: 1.5,
                    memory_percent: 2.0,
                },
                ProcessStat {
                    pid: 4321,
                    name: "worker".into(),
                    cpu_percent: 25.0,
                    memory_percent: 10.0,
                },
            ],
            pid_count: 3,
            boot_time_secs: 1_700_000_000,
            sessions: vec![SessionStat {
                user: "root".into(),
                terminal: Some("tty1".into()),
                host: None,
                started_secs: 1_700_000_100,
            }],
            os: OsIdentity {
                system: "Linux".into(),
                release: "6.8.0".into(),
                version: "Ubuntu 24.04".into(),
                machine: "x86_64".into(),
            },
        };
        Self {
            state: Mutex::new(state),
        }
    }

    /// Mutate the fake's state between polls.
    pub fn update(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().unwrap());
    }
}

impl HostQuery for FakeQuery {
    fn cpu_usage(&self) -> Result<CpuUsage, QueryError> {
        let st = self.state.lock().unwrap();
        Ok(CpuUsage {
            total_percent: st.cpu_total,
            per_core_percent: st.cpu_per_core.clone(),
        })
    }

    fn cpu_frequency(&self) -> Option<CpuFrequency> {
        self.state.lock().unwrap().frequency.clone()
    }

    fn core_counts(&self) -> Result<CoreCounts, QueryError> {
        let st = self.state.lock().unwrap();
        Ok(CoreCounts {
            physical: st.physical_cores,
            logical: st.logical_cores,
        })
    }

    fn memory(&self) -> Result<RamStat, QueryError> {
        Ok(self.state.lock().unwrap().ram.clone())
    }

    fn swap(&self) -> Result<Option<SwapStat>, QueryError> {
        Ok(self.state.lock().unwrap().swap.clone())
    }

    fn partitions(&self) -> Result<Vec<PartitionEntry>, QueryError> {
        Ok(self.state.lock().unwrap().partitions.clone())
    }

    fn partition_usage(&self, mount: &str) -> Result<UsageStat, QueryError> {
        let st = self.state.lock().unwrap();
        if st.failing_mounts.contains(mount) {
            return Err(QueryError::Backend(format!("usage lookup failed for {}", mount)));
        }
        st.usage
            .get(mount)
            .copied()
            .ok_or_else(|| QueryError::Backend(format!("no partition mounted at {}", mount)))
    }

    fn disk_io(&self) -> Result<Option<DiskIoStat>, QueryError> {
        Ok(self.state.lock().unwrap().disk_io)
    }

    fn net_io(&self) -> Result<NetIoStat, QueryError> {
        let st = self.state.lock().unwrap();
        if st.net_io_error {
            return Err(QueryError::Backend("network counters unavailable".into()));
        }
        Ok(st.net_io)
    }

    fn connections(&self) -> Result<Vec<ConnectionStat>, QueryError> {
        Ok(self.state.lock().unwrap().connections.clone())
    }

    fn interfaces(&self) -> Result<Vec<InterfaceStat>, QueryError> {
        Ok(self.state.lock().unwrap().interfaces.clone())
    }

    fn processes(&self) -> Result<Vec<ProcessStat>, QueryError> {
        Ok(self.state.lock().unwrap().processes.clone())
    }

    fn pid_count(&self) -> Result<u32, QueryError> {
        Ok(self.state.lock().unwrap().pid_count)
    }

    fn boot_time(&self) -> Result<u64, QueryError> {
        Ok(self.state.lock().unwrap().boot_time_secs)
    }

    fn sessions(&self) -> Result<Vec<SessionStat>, QueryError> {
        Ok(self.state.lock().unwrap().sessions.clone())
    }

    fn os_identity(&self) -> OsIdentity {
        self.state.lock().unwrap().os.clone()
    }
}
