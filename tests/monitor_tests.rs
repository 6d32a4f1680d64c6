// Monitor behavior against an injectable adapter: rates, per-item fault
// tolerance, churn divergence, absent-metric handling.

mod common;

use common::FakeQuery;
use hostmon::models::{ConnState, NetIoStat};
use hostmon::monitors::{
    CpuMonitor, MemoryMonitor, NetworkMonitor, ProcessMonitor, StorageMonitor, SystemMonitor,
};
use hostmon::host_query::PartitionEntry;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[test]
fn test_network_first_sample_has_zero_rates() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        st.net_io = NetIoStat {
            bytes_sent: 1000,
            bytes_recv: 2000,
            packets_sent: 10,
            packets_recv: 20,
        }
    });
    let mut monitor = NetworkMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.io.bytes_sent, 1000);
    assert_eq!(snap.io.bytes_recv, 2000);
    assert_eq!(snap.sent_bytes_per_sec, Some(0.0));
    assert_eq!(snap.recv_bytes_per_sec, Some(0.0));
}

#[test]
fn test_network_send_rate_over_one_second() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.net_io.bytes_sent = 1_000_000);
    let mut monitor = NetworkMonitor::new(query.clone());
    let t0 = Instant::now();
    monitor.sample_at(t0).unwrap();

    query.update(|st| st.net_io.bytes_sent += 5_000_000);
    let snap = monitor.sample_at(t0 + Duration::from_secs(1)).unwrap();
    assert_eq!(snap.sent_bytes_per_sec, Some(5_000_000.0));
}

#[test]
fn test_network_failed_poll_keeps_rate_baseline() {
    let query = Arc::new(FakeQuery::new());
    let mut monitor = NetworkMonitor::new(query.clone());
    let t0 = Instant::now();
    monitor.sample_at(t0).unwrap();

    query.update(|st| st.net_io_error = true);
    assert!(monitor.sample_at(t0 + Duration::from_secs(1)).is_err());

    // Next successful poll still rates against the last good sample at t0.
    query.update(|st| {
        st.net_io_error = false;
        st.net_io.bytes_sent += 4_000_000;
    });
    let snap = monitor.sample_at(t0 + Duration::from_secs(2)).unwrap();
    assert_eq!(snap.sent_bytes_per_sec, Some(2_000_000.0));
}

#[test]
fn test_network_connection_addresses_stay_optional() {
    let query = Arc::new(FakeQuery::new());
    let mut monitor = NetworkMonitor::new(query);
    let snap = monitor.sample().unwrap();
    let listener = &snap.connections[0];
    assert_eq!(listener.state, ConnState::Listen);
    assert!(listener.local_addr.is_some());
    assert!(listener.remote_addr.is_none());
}

#[test]
fn test_storage_failing_partition_is_excluded() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        st.failing_mounts.insert("/data".to_string());
    });
    let mut monitor = StorageMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.partitions.len(), 2);
    assert!(snap.partitions.iter().all(|p| p.mount != "/data"));
}

#[test]
fn test_storage_devices_unique_within_snapshot() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        // A bind mount shows the same device under a second mount point.
        st.partitions.push(PartitionEntry {
            device: "/dev/sda1".into(),
            mount: "/".into(),
            fstype: "ext4".into(),
        });
    });
    let mut monitor = StorageMonitor::new(query);
    let snap = monitor.sample().unwrap();
    let mut devices: Vec<&str> = snap.partitions.iter().map(|p| p.device.as_str()).collect();
    devices.sort_unstable();
    let before = devices.len();
    devices.dedup();
    assert_eq!(devices.len(), before);
}

#[test]
fn test_storage_write_rate_over_one_second() {
    let query = Arc::new(FakeQuery::new());
    let mut monitor = StorageMonitor::new(query.clone());
    let t0 = Instant::now();
    let first = monitor.sample_at(t0).unwrap();
    assert_eq!(first.write_bytes_per_sec, Some(0.0));

    query.update(|st| {
        if let Some(io) = st.disk_io.as_mut() {
            io.write_bytes += 1_048_576;
        }
    });
    let snap = monitor.sample_at(t0 + Duration::from_secs(1)).unwrap();
    assert_eq!(snap.write_bytes_per_sec, Some(1_048_576.0));
}

#[test]
fn test_storage_rates_absent_without_io_counters() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.disk_io = None);
    let mut monitor = StorageMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert!(snap.io.is_none());
    assert!(snap.read_bytes_per_sec.is_none());
    assert!(snap.write_bytes_per_sec.is_none());
}

#[test]
fn test_process_churn_divergence_preserved() {
    let query = Arc::new(FakeQuery::new());
    // Process 4321 exits after the pid listing but before the table read.
    query.update(|st| {
        st.pid_count = 3;
        st.processes.retain(|p| p.pid != 4321);
    });
    let monitor = ProcessMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.total_count, 3);
    assert_eq!(snap.processes.len(), 2);
    assert!(snap.processes.iter().all(|p| p.pid != 4321));
}

#[test]
fn test_process_percents_clamped() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        st.processes[0].cpu_percent = 250.0;
        st.processes[0].memory_percent = -3.0;
    });
    let monitor = ProcessMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.processes[0].cpu_percent, 100.0);
    assert_eq!(snap.processes[0].memory_percent, 0.0);
}

#[test]
fn test_memory_sample_is_idempotent() {
    let query = Arc::new(FakeQuery::new());
    let monitor = MemoryMonitor::new(query);
    let first = monitor.sample().unwrap();
    let second = monitor.sample().unwrap();
    assert_eq!(first.ram.total, second.ram.total);
    assert_eq!(first.ram.used, second.ram.used);
    assert_eq!(first.ram.percent, second.ram.percent);
    assert_eq!(
        first.swap.as_ref().map(|s| s.used),
        second.swap.as_ref().map(|s| s.used)
    );
}

#[test]
fn test_memory_missing_swap_stays_absent() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.swap = None);
    let monitor = MemoryMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert!(snap.swap.is_none());
}

#[test]
fn test_memory_percent_clamped() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.ram.percent = 104.2);
    let monitor = MemoryMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.ram.percent, 100.0);
}

#[test]
fn test_cpu_per_core_length_matches_logical_cores() {
    let query = Arc::new(FakeQuery::new());
    let mut monitor = CpuMonitor::new(query, Duration::from_secs(1));
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.per_core_percent.len(), snap.logical_cores as usize);
}

#[test]
fn test_cpu_threads_per_core_guards_missing_physical_count() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        st.physical_cores = None;
        st.logical_cores = 8;
        st.cpu_per_core = vec![5.0; 8];
    });
    let mut monitor = CpuMonitor::new(query, Duration::from_secs(1));
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.physical_cores, None);
    assert_eq!(snap.threads_per_core, 8);
}

#[test]
fn test_cpu_missing_frequency_stays_absent() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.frequency = None);
    let mut monitor = CpuMonitor::new(query, Duration::from_secs(1));
    let snap = monitor.sample().unwrap();
    assert!(snap.frequency.is_none());
}

#[test]
fn test_cpu_repoll_within_interval_returns_cached_usage() {
    let query = Arc::new(FakeQuery::new());
    let mut monitor = CpuMonitor::new(query.clone(), Duration::from_secs(1));
    let t0 = Instant::now();
    let first = monitor.sample_at(t0).unwrap();
    assert_eq!(first.total_percent, 12.5);

    query.update(|st| st.cpu_total = 90.0);
    let cached = monitor.sample_at(t0 + Duration::from_millis(300)).unwrap();
    assert_eq!(cached.total_percent, 12.5);

    let fresh = monitor.sample_at(t0 + Duration::from_secs(2)).unwrap();
    assert_eq!(fresh.total_percent, 90.0);
}

#[test]
fn test_cpu_percents_clamped() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| {
        st.cpu_total = 180.0;
        st.cpu_per_core = vec![120.0, -7.0, 50.0, 50.0];
    });
    let mut monitor = CpuMonitor::new(query, Duration::from_secs(1));
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.total_percent, 100.0);
    assert_eq!(snap.per_core_percent[0], 100.0);
    assert_eq!(snap.per_core_percent[1], 0.0);
}

#[test]
fn test_system_monitor_aggregates_identity_and_sessions() {
    let query = Arc::new(FakeQuery::new());
    let monitor = SystemMonitor::new(query);
    let snap = monitor.sample().unwrap();
    assert_eq!(snap.boot_time_secs, 1_700_000_000);
    assert_eq!(snap.sessions.len(), 1);
    assert_eq!(snap.sessions[0].user, "root");
    assert!(snap.sessions[0].host.is_none());
    assert_eq!(snap.os.system, "Linux");
    assert_eq!(snap.os.machine, "x86_64");
}
