use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub polling: PollingConfig,
    pub publishing: PublishingConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub cpu_interval_ms: u64,
    pub memory_interval_ms: u64,
    pub storage_interval_ms: u64,
    pub network_interval_ms: u64,
    pub process_interval_ms: u64,
    pub system_interval_ms: u64,
    /// CPU utilization measurement interval. Polls arriving faster than this
    /// return the previous measurement instead of blocking (see CpuMonitor).
    pub cpu_sample_interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            cpu_interval_ms: 1000,
            memory_interval_ms: 1000,
            storage_interval_ms: 1000,
            network_interval_ms: 1000,
            process_interval_ms: 2000,
            system_interval_ms: 5000,
            cpu_sample_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublishingConfig {
    /// Max number of snapshot updates kept in the broadcast channel (slow consumers may lag).
    pub broadcast_capacity: usize,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// How often to log worker stats (samples taken/failed) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: 60,
        }
    }
}

impl AppConfig {
    /// Load from CONFIG_FILE (default config.toml); built-in defaults when
    /// no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(e) => Err(anyhow::Error::new(e).context(format!("reading {}", path))),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.polling.cpu_interval_ms > 0,
            "polling.cpu_interval_ms must be > 0, got {}",
            self.polling.cpu_interval_ms
        );
        anyhow::ensure!(
            self.polling.memory_interval_ms > 0,
            "polling.memory_interval_ms must be > 0, got {}",
            self.polling.memory_interval_ms
        );
        anyhow::ensure!(
            self.polling.storage_interval_ms > 0,
            "polling.storage_interval_ms must be > 0, got {}",
            self.polling.storage_interval_ms
        );
        anyhow::ensure!(
            self.polling.network_interval_ms > 0,
            "polling.network_interval_ms must be > 0, got {}",
            self.polling.network_interval_ms
        );
        anyhow::ensure!(
            self.polling.process_interval_ms > 0,
            "polling.process_interval_ms must be > 0, got {}",
            self.polling.process_interval_ms
        );
        anyhow::ensure!(
            self.polling.system_interval_ms > 0,
            "polling.system_interval_ms must be > 0, got {}",
            self.polling.system_interval_ms
        );
        anyhow::ensure!(
            self.polling.cpu_sample_interval_ms > 0,
            "polling.cpu_sample_interval_ms must be > 0, got {}",
            self.polling.cpu_sample_interval_ms
        );
        anyhow::ensure!(
            self.publishing.broadcast_capacity > 0,
            "publishing.broadcast_capacity must be > 0, got {}",
            self.publishing.broadcast_capacity
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
