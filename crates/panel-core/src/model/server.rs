// ── Server domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle status that makes a server temporarily unusable.
///
/// A usable server has no status at all (`Server::status == None`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum ServerStatus {
    Installing,
    InstallFailed,
    ReinstallFailed,
    Suspended,
    RestoringBackup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SftpDetails {
    pub ip: String,
    pub port: u16,
}

/// Resource limits in MiB (memory, swap, disk) and percent (cpu).
///
/// `0` on memory, disk, or cpu means unlimited. Render these through
/// `crate::size::limit_to_string`, never as a raw number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerLimits {
    pub memory: u64,
    /// `-1` is unlimited, `0` disables swap.
    pub swap: i64,
    pub disk: u64,
    pub io: Option<u64>,
    pub cpu: u64,
    pub threads: Option<String>,
    pub oom_disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLimits {
    pub databases: u32,
    pub allocations: u32,
    pub backups: u32,
}

/// Startup variable defined by the server's egg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggVariable {
    pub name: String,
    pub description: Option<String>,
    pub env_variable: String,
    pub default_value: Option<String>,
    pub server_value: Option<String>,
    pub is_editable: bool,
    /// Validation rules, e.g. `["required", "string", "max:20"]`.
    pub rules: Vec<String>,
}

/// Network endpoint assigned to a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: i64,
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    pub is_default: bool,
}

impl Allocation {
    /// `alias:port` when an alias is set, else `ip:port`.
    pub fn display_address(&self) -> String {
        let host = self.alias.as_deref().unwrap_or(&self.ip);
        format!("{host}:{}", self.port)
    }
}

/// Static descriptor of the server being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Short identifier used in URLs.
    pub id: String,
    pub internal_id: i64,
    pub uuid: String,
    pub name: String,
    pub node: String,
    pub is_node_under_maintenance: bool,
    pub status: Option<ServerStatus>,
    pub invocation: String,
    pub docker_image: String,
    pub sftp_details: SftpDetails,
    /// `None` for both an absent and an empty description.
    pub description: Option<String>,
    pub limits: ServerLimits,
    pub egg_features: Vec<String>,
    pub feature_limits: FeatureLimits,
    pub is_transferring: bool,
    pub variables: Vec<EggVariable>,
    pub allocations: Vec<Allocation>,
}

impl Server {
    /// The default-flagged allocation, else the first one listed.
    pub fn primary_allocation(&self) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.allocations.first())
    }

    /// Installing, suspended, restoring, or mid-transfer.
    pub fn is_busy(&self) -> bool {
        self.status.is_some() || self.is_transferring || self.is_node_under_maintenance
    }
}
