// Config loading and validation tests

use hostmon::config::AppConfig;

const VALID_CONFIG: &str = r#"
[polling]
cpu_interval_ms = 1000
memory_interval_ms = 1000
storage_interval_ms = 1000
network_interval_ms = 1000
process_interval_ms = 2000
system_interval_ms = 5000
cpu_sample_interval_ms = 1000

[publishing]
broadcast_capacity = 60

[monitoring]
stats_log_interval_secs = 60
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.polling.cpu_interval_ms, 1000);
    assert_eq!(config.polling.process_interval_ms, 2000);
    assert_eq!(config.polling.system_interval_ms, 5000);
    assert_eq!(config.publishing.broadcast_capacity, 60);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
}

#[test]
fn test_config_empty_input_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("defaults");
    assert_eq!(config.polling.cpu_interval_ms, 1000);
    assert_eq!(config.polling.process_interval_ms, 2000);
    assert_eq!(config.polling.system_interval_ms, 5000);
    assert_eq!(config.polling.cpu_sample_interval_ms, 1000);
    assert_eq!(config.publishing.broadcast_capacity, 60);
}

#[test]
fn test_config_partial_section_keeps_other_defaults() {
    let config = AppConfig::load_from_str("[polling]\nprocess_interval_ms = 4000\n").unwrap();
    assert_eq!(config.polling.process_interval_ms, 4000);
    assert_eq!(config.polling.cpu_interval_ms, 1000);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
}

#[test]
fn test_config_validation_rejects_zero_interval() {
    let bad = VALID_CONFIG.replace("network_interval_ms = 1000", "network_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.network_interval_ms"));
}

#[test]
fn test_config_validation_rejects_zero_cpu_sample_interval() {
    let bad = VALID_CONFIG.replace("cpu_sample_interval_ms = 1000", "cpu_sample_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.cpu_sample_interval_ms"));
}

#[test]
fn test_config_validation_rejects_zero_broadcast_capacity() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 60", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("publishing.broadcast_capacity"));
}
