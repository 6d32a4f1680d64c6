// Worker integration test: spawn, receive per-domain updates, shutdown

mod common;

use common::FakeQuery;
use hostmon::models::SnapshotEvent;
use hostmon::monitors::MonitorSet;
use hostmon::worker::{WorkerConfig, WorkerDeps, spawn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

fn fast_config() -> WorkerConfig {
    WorkerConfig {
        cpu_interval_ms: 10,
        memory_interval_ms: 10,
        storage_interval_ms: 10,
        network_interval_ms: 10,
        process_interval_ms: 20,
        system_interval_ms: 25,
        stats_log_interval_secs: 3600,
    }
}

#[tokio::test]
async fn worker_broadcasts_domain_updates_and_shuts_down() {
    let query = Arc::new(FakeQuery::new());
    let monitors = MonitorSet::new(query, Duration::from_millis(200));
    let (tx, mut rx) = broadcast::channel(64);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let handle = spawn(
        WorkerDeps {
            monitors,
            tx,
            shutdown_rx,
        },
        fast_config(),
    );

    let mut saw_cpu = false;
    let mut saw_memory = false;
    let mut saw_process = false;
    for _ in 0..60 {
        let update = match tokio::time::timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("no update within 500ms")
        {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => panic!("snapshot channel closed"),
        };
        assert!(update.timestamp_ms > 0);
        match update.event {
            SnapshotEvent::Cpu(_) => saw_cpu = true,
            SnapshotEvent::Memory(snap) => {
                saw_memory = true;
                assert_eq!(snap.ram.percent, 50.0);
            }
            SnapshotEvent::Process(snap) => {
                saw_process = true;
                assert_eq!(snap.total_count, 3);
            }
            _ => {}
        }
        if saw_cpu && saw_memory && saw_process {
            break;
        }
    }
    assert!(saw_cpu && saw_memory && saw_process);

    let _ = shutdown_tx.send(());
    handle.await.unwrap();
}

#[tokio::test]
async fn worker_keeps_sampling_after_a_domain_fails() {
    let query = Arc::new(FakeQuery::new());
    query.update(|st| st.net_io_error = true);
    let monitors = MonitorSet::new(query, Duration::from_millis(200));
    let (tx, mut rx) = broadcast::channel(64);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let handle = spawn(
        WorkerDeps {
            monitors,
            tx,
            shutdown_rx,
        },
        fast_config(),
    );

    // Network sampling fails every tick; the other domains keep flowing.
    let mut saw_memory = false;
    for _ in 0..60 {
        let update = match tokio::time::timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("no update within 500ms")
        {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => panic!("snapshot channel closed"),
        };
        match update.event {
            SnapshotEvent::Network(_) => panic!("failing network domain must not broadcast"),
            SnapshotEvent::Memory(_) => {
                saw_memory = true;
                break;
            }
            _ => {}
        }
    }
    assert!(saw_memory);

    let _ = shutdown_tx.send(());
    handle.await.unwrap();
}
