// Boot time, login session and OS identity models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStat {
    pub user: String,
    /// Absent for sessions without a controlling terminal.
    pub terminal: Option<String>,
    /// Absent for local sessions.
    pub host: Option<String>,
    pub started_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsIdentity {
    pub system: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    pub boot_time_secs: u64,
    pub sessions: Vec<SessionStat>,
    pub os: OsIdentity,
}
