// Background sampling worker: drives the monitors on independent per-domain
// intervals and fans snapshot updates out over a broadcast channel.

use tokio::sync::{broadcast, oneshot};
use tokio::time::{Duration, Instant, interval};

use crate::host_query::HostQuery;
use crate::models::{SnapshotEvent, SnapshotUpdate};
use crate::monitors::MonitorSet;

/// Rate limit for "no receivers" logging (avoid logging every second when nothing is subscribed)
const NO_RECEIVERS_LOG_INTERVAL: Duration = Duration::from_secs(60);

/// Monitors, broadcast channel, and shutdown for the worker.
pub struct WorkerDeps<Q> {
    pub monitors: MonitorSet<Q>,
    pub tx: broadcast::Sender<SnapshotUpdate>,
    pub shutdown_rx: oneshot::Receiver<()>,
}

/// Per-domain poll intervals and logging cadence.
pub struct WorkerConfig {
    pub cpu_interval_ms: u64,
    pub memory_interval_ms: u64,
    pub storage_interval_ms: u64,
    pub network_interval_ms: u64,
    pub process_interval_ms: u64,
    pub system_interval_ms: u64,
    /// How often to log worker stats (real seconds).
    pub stats_log_interval_secs: u64,
}

fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
            0
        })
}

pub fn spawn<Q: HostQuery + 'static>(
    deps: WorkerDeps<Q>,
    config: WorkerConfig,
) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        mut monitors,
        tx,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        let mut cpu_tick = interval(Duration::from_millis(config.cpu_interval_ms));
        let mut memory_tick = interval(Duration::from_millis(config.memory_interval_ms));
        let mut storage_tick = interval(Duration::from_millis(config.storage_interval_ms));
        let mut network_tick = interval(Duration::from_millis(config.network_interval_ms));
        let mut process_tick = interval(Duration::from_millis(config.process_interval_ms));
        let mut system_tick = interval(Duration::from_millis(config.system_interval_ms));
        let mut stats_log_tick = interval(Duration::from_secs(config.stats_log_interval_secs));
        for tick in [
            &mut cpu_tick,
            &mut memory_tick,
            &mut storage_tick,
            &mut network_tick,
            &mut process_tick,
            &mut system_tick,
            &mut stats_log_tick,
        ] {
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        }

        let mut samples_total: u64 = 0;
        let mut sample_failures: u64 = 0;
        let mut last_no_receivers_log: Option<Instant> = None;

        let worker_span = tracing::span!(tracing::Level::DEBUG, "worker");
        let _guard = worker_span.enter();

        loop {
            let event = tokio::select! {
                _ = cpu_tick.tick() => match monitors.cpu.sample() {
                    Ok(s) => Some(SnapshotEvent::Cpu(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_cpu", "CPU sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = memory_tick.tick() => match monitors.memory.sample() {
                    Ok(s) => Some(SnapshotEvent::Memory(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_memory", "memory sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = storage_tick.tick() => match monitors.storage.sample() {
                    Ok(s) => Some(SnapshotEvent::Storage(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_storage", "storage sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = network_tick.tick() => match monitors.network.sample() {
                    Ok(s) => Some(SnapshotEvent::Network(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_network", "network sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = process_tick.tick() => match monitors.process.sample() {
                    Ok(s) => Some(SnapshotEvent::Process(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_process", "process sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = system_tick.tick() => match monitors.system.sample() {
                    Ok(s) => Some(SnapshotEvent::System(s)),
                    Err(e) => {
                        tracing::warn!(error = %e, operation = "sample_system", "system sample failed");
                        sample_failures += 1;
                        None
                    }
                },
                _ = stats_log_tick.tick() => {
                    tracing::info!(samples_total, sample_failures, "worker stats");
                    continue;
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            };

            let Some(event) = event else { continue };
            samples_total += 1;

            let update = SnapshotUpdate {
                timestamp_ms: epoch_ms(),
                event,
            };
            if tx.send(update).is_err() {
                let should_log = last_no_receivers_log
                    .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_LOG_INTERVAL);
                if should_log {
                    tracing::debug!(
                        operation = "broadcast_snapshot",
                        "no active subscribers; snapshot channel has no receivers"
                    );
                    last_no_receivers_log = Some(Instant::now());
                }
            }
        }
    })
}
