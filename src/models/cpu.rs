// CPU snapshot models

use serde::{Deserialize, Serialize};

/// CPU clock info in MHz. The whole struct is absent on platforms without
/// frequency reporting; min/max are absent when only the current clock is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuFrequency {
    pub current_mhz: f64,
    pub min_mhz: Option<f64>,
    pub max_mhz: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSnapshot {
    pub total_percent: f64,
    /// Per-core utilization; length always equals `logical_cores`.
    pub per_core_percent: Vec<f64>,
    pub frequency: Option<CpuFrequency>,
    /// Absent when the OS does not report a physical core count.
    pub physical_cores: Option<u32>,
    pub logical_cores: u32,
    pub threads_per_core: u32,
}
