// ── Live resource usage ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Power state reported by the daemon.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ServerState {
    #[default]
    Offline,
    Starting,
    Running,
    Stopping,
}

impl ServerState {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Starting | Self::Stopping)
    }
}

/// Point-in-time resource sample. Replaced wholesale on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStats {
    pub status: ServerState,
    pub is_suspended: bool,
    pub memory_usage_bytes: u64,
    /// Absolute CPU usage; 100.0 is one full core.
    pub cpu_usage_percent: f64,
    pub disk_usage_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    pub uptime_ms: u64,
}
