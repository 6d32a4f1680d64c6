// Model serialization tests (JSON camelCase, tagged updates)

use hostmon::models::*;

#[test]
fn test_cpu_snapshot_serialization_camel_case() {
    let cpu = CpuSnapshot {
        total_percent: 12.5,
        per_core_percent: vec![10.0, 15.0],
        frequency: Some(CpuFrequency {
            current_mhz: 2400.0,
            min_mhz: Some(800.0),
            max_mhz: Some(4200.0),
        }),
        physical_cores: Some(1),
        logical_cores: 2,
        threads_per_core: 2,
    };
    let json = serde_json::to_string(&cpu).unwrap();
    assert!(json.contains("\"totalPercent\""));
    assert!(json.contains("\"perCorePercent\""));
    assert!(json.contains("\"logicalCores\""));
    let back: CpuSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_percent, cpu.total_percent);
    assert_eq!(back.per_core_percent.len(), 2);
}

#[test]
fn test_cpu_snapshot_absent_frequency_roundtrip() {
    let cpu = CpuSnapshot {
        total_percent: 0.0,
        per_core_percent: vec![0.0],
        frequency: None,
        physical_cores: None,
        logical_cores: 1,
        threads_per_core: 1,
    };
    let json = serde_json::to_string(&cpu).unwrap();
    let back: CpuSnapshot = serde_json::from_str(&json).unwrap();
    assert!(back.frequency.is_none());
    assert!(back.physical_cores.is_none());
}

#[test]
fn test_memory_snapshot_json_roundtrip() {
    let mem = MemorySnapshot {
        ram: RamStat {
            total: 1024,
            used: 512,
            available: 512,
            free: 256,
            percent: 50.0,
        },
        swap: None,
    };
    let json = serde_json::to_string(&mem).unwrap();
    assert!(json.contains("\"percent\""));
    let back: MemorySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ram.used, mem.ram.used);
    assert!(back.swap.is_none());
}

#[test]
fn test_partition_stat_json_roundtrip() {
    let p = PartitionStat {
        device: "/dev/sda1".into(),
        mount: "/".into(),
        fstype: "ext4".into(),
        total_space: 1000,
        used_space: 400,
        free_space: 600,
        usage_percent: 40.0,
    };
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"usagePercent\""));
    let back: PartitionStat = serde_json::from_str(&json).unwrap();
    assert_eq!(back.device, p.device);
    assert_eq!(back.usage_percent, p.usage_percent);
}

#[test]
fn test_storage_snapshot_json_roundtrip() {
    let s = StorageSnapshot {
        partitions: vec![],
        io: Some(DiskIoStat {
            read_bytes: 1000,
            write_bytes: 2000,
            read_ops: 10,
            write_ops: 20,
        }),
        read_bytes_per_sec: Some(0.0),
        write_bytes_per_sec: None,
    };
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"readBytes\""));
    let back: StorageSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.io.unwrap().write_bytes, 2000);
    assert!(back.write_bytes_per_sec.is_none());
}

#[test]
fn test_connection_stat_state_serialization() {
    let c = ConnectionStat {
        local_addr: Some("127.0.0.1:8080".parse().unwrap()),
        remote_addr: None,
        state: ConnState::Established,
    };
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("\"ESTABLISHED\""));
    assert!(json.contains("\"127.0.0.1:8080\""));
    let back: ConnectionStat = serde_json::from_str(&json).unwrap();
    assert_eq!(back.state, ConnState::Established);
    assert!(back.remote_addr.is_none());

    let udp = ConnectionStat {
        local_addr: Some("[::1]:53".parse().unwrap()),
        remote_addr: None,
        state: ConnState::None,
    };
    let json = serde_json::to_string(&udp).unwrap();
    assert!(json.contains("\"NONE\""));
}

#[test]
fn test_network_snapshot_json_roundtrip() {
    let n = NetworkSnapshot {
        io: NetIoStat {
            bytes_sent: 100,
            bytes_recv: 200,
            packets_sent: 10,
            packets_recv: 20,
        },
        sent_bytes_per_sec: Some(50.0),
        recv_bytes_per_sec: Some(0.0),
        connections: vec![],
        interfaces: vec![InterfaceStat {
            name: "eth0".into(),
            mac_address: "00:11:22:33:44:55".into(),
            ipv4: vec!["192.168.1.10".into()],
            ipv6: vec![],
            speed_bps: 1_000_000_000,
            is_up: true,
        }],
    };
    let json = serde_json::to_string(&n).unwrap();
    assert!(json.contains("\"bytesSent\""));
    assert!(json.contains("\"isUp\""));
    let back: NetworkSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.io.bytes_recv, 200);
    assert_eq!(back.interfaces.len(), 1);
}

#[test]
fn test_process_snapshot_json_roundtrip() {
    let p = ProcessSnapshot {
        processes: vec![ProcessStat {
            pid: 42,
            name: "hostmon".into(),
            cpu_percent: 1.5,
            memory_percent: 2.5,
        }],
        total_count: 43,
    };
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"totalCount\""));
    assert!(json.contains("\"cpuPercent\""));
    let back: ProcessSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_count, 43);
    assert_eq!(back.processes[0].pid, 42);
}

#[test]
fn test_system_snapshot_json_roundtrip() {
    let s = SystemSnapshot {
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
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"bootTimeSecs\""));
    assert!(json.contains("\"startedSecs\""));
    let back: SystemSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.boot_time_secs, s.boot_time_secs);
    assert!(back.sessions[0].host.is_none());
}

#[test]
fn test_snapshot_update_is_domain_tagged() {
    let update = SnapshotUpdate {
        timestamp_ms: 12345,
        event: SnapshotEvent::Memory(MemorySnapshot {
            ram: RamStat {
                total: 1,
                used: 1,
                available: 0,
                free: 0,
                percent: 100.0,
            },
            swap: None,
        }),
    };
    let json = serde_json::to_string(&update).unwrap();
    assert!(json.contains("\"timestampMs\":12345"));
    assert!(json.contains("\"domain\":\"memory\""));
    let back: SnapshotUpdate = serde_json::from_str(&json).unwrap();
    assert_eq!(back.timestamp_ms, 12345);
    assert!(matches!(back.event, SnapshotEvent::Memory(_)));
}
