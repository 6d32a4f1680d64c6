use anyhow::Result;
use hostmon::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout carries the snapshot JSON lines.
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = version::VERSION, "starting {}", version::NAME);

    let app_config = config::AppConfig::load()?;
    let (tx, _) =
        broadcast::channel::<models::SnapshotUpdate>(app_config.publishing.broadcast_capacity);
    let mut rx = tx.subscribe();

    let query = Arc::new(host_query::SysinfoQuery::new());
    let monitors = monitors::MonitorSet::new(
        query,
        Duration::from_millis(app_config.polling.cpu_sample_interval_ms),
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            monitors,
            tx,
            shutdown_rx,
        },
        worker::WorkerConfig {
            cpu_interval_ms: app_config.polling.cpu_interval_ms,
            memory_interval_ms: app_config.polling.memory_interval_ms,
            storage_interval_ms: app_config.polling.storage_interval_ms,
            network_interval_ms: app_config.polling.network_interval_ms,
            process_interval_ms: app_config.polling.process_interval_ms,
            system_interval_ms: app_config.polling.system_interval_ms,
            stats_log_interval_secs: app_config.monitoring.stats_log_interval_secs,
        },
    );

    let printer = async move {
        loop {
            match rx.recv().await {
                Ok(update) => match serde_json::to_string(&update) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!(error = %e, "snapshot serialization failed"),
                },
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "output fell behind the snapshot channel");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    tokio::select! {
        _ = printer => {}
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = worker_handle.await;
        }
    }

    Ok(())
}
