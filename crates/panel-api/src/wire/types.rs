//! Raw response and request types for the panel client API.
//!
//! Field names match the snake_case JSON the panel sends. Every response
//! struct is `#[serde(default)]` and every non-`Option` field reads `null`
//! through `null_as_default`: a field the backend leaves out or nulls
//! arrives as its zero value, and the domain conversion decides what that
//! means. A field of the wrong type still fails the decode.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{
    NoRelationships, NumberOrString, Resource, StringOrList, Wire, WireList, null_as_default,
};

// ── Servers ──────────────────────────────────────────────────────────

/// Server resource from `GET /api/client` and `GET /api/client/servers/{uuid}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServer {
    #[serde(deserialize_with = "null_as_default")]
    pub server_owner: bool,
    /// Short identifier used in URLs.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub internal_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_node_under_maintenance: bool,
    /// One of `installing`, `install_failed`, `reinstall_failed`,
    /// `suspended`, `restoring_backup`, or null when the server is usable.
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub invocation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub docker_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sftp_details: RawSftpDetails,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub limits: RawServerLimits,
    pub egg_features: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_limits: RawFeatureLimits,
    #[serde(deserialize_with = "null_as_default")]
    pub is_transferring: bool,
    pub relationships: Option<ServerRelationships>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawSftpDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
}

/// Resource limits in MiB / percent. `0` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawServerLimits {
    #[serde(deserialize_with = "null_as_default")]
    pub memory: i64,
    /// `-1` is unlimited swap, `0` disables swap.
    #[serde(deserialize_with = "null_as_default")]
    pub swap: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub disk: i64,
    #[serde(alias = "io_weight")]
    pub io: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: i64,
    pub threads: Option<String>,
    pub oom_disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawFeatureLimits {
    #[serde(deserialize_with = "null_as_default")]
    pub databases: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub allocations: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub backups: i64,
}

/// Relationships expanded with `?include=` on server resources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerRelationships {
    pub variables: Option<WireList<RawEggVariable>>,
    pub allocations: Option<WireList<RawAllocation>>,
}

impl Resource for RawServer {
    type Relationships = ServerRelationships;

    fn attach_relationships(&mut self, relationships: ServerRelationships) {
        if self.relationships.is_none() {
            self.relationships = Some(relationships);
        }
    }
}

// ── Allocations ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAllocation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(alias = "alias")]
    pub ip_alias: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    pub notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_default: bool,
}

impl Resource for RawAllocation {
    type Relationships = NoRelationships;
}

// ── Egg variables ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEggVariable {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub env_variable: String,
    pub default_value: Option<String>,
    pub server_value: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_editable: bool,
    /// Validation rules, `|`-joined on older panels.
    #[serde(deserialize_with = "null_as_default")]
    pub rules: StringOrList,
}

impl Resource for RawEggVariable {
    type Relationships = NoRelationships;
}

// ── Resource usage ───────────────────────────────────────────────────

/// Live resource sample from `GET /api/client/servers/{uuid}/resources`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServerStats {
    /// `offline`, `starting`, `running`, or `stopping`.
    #[serde(deserialize_with = "null_as_default")]
    pub current_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_suspended: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: RawResources,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawResources {
    #[serde(deserialize_with = "null_as_default")]
    pub memory_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu_absolute: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub disk_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub network_rx_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub network_tx_bytes: u64,
    /// Milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub uptime: u64,
}

impl Resource for RawServerStats {
    type Relationships = NoRelationships;
}

// ── Files ────────────────────────────────────────────────────────────

/// Directory entry. Newer daemons use the short names (`file`, `mime`,
/// `created`), older ones the `is_*` / `*_at` names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFileObject {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mode_bits: NumberOrString,
    #[serde(deserialize_with = "null_as_default")]
    pub size: NumberOrString,
    #[serde(alias = "file")]
    #[serde(deserialize_with = "null_as_default")]
    pub is_file: bool,
    #[serde(alias = "symlink")]
    #[serde(deserialize_with = "null_as_default")]
    pub is_symlink: bool,
    #[serde(alias = "mime")]
    #[serde(deserialize_with = "null_as_default")]
    pub mimetype: String,
    #[serde(alias = "created")]
    pub created_at: Option<String>,
    #[serde(alias = "modified")]
    pub modified_at: Option<String>,
}

impl Resource for RawFileObject {
    type Relationships = NoRelationships;
}

/// Directory listing: `GET /api/client/servers/{uuid}/files/list`.
///
/// Paginated panels nest the page under `entries`; older ones return a
/// plain list with no counters.
#[derive(Debug, Clone)]
pub enum FileListing {
    Paged { entries: WireList<RawFileObject> },
    Plain(WireList<RawFileObject>),
}

impl<'de> Deserialize<'de> for FileListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let entries = value.as_object_mut().and_then(|map| map.remove("entries"));
        let listing = match entries {
            Some(entries) => {
                serde_json::from_value(entries).map(|entries| Self::Paged { entries })
            }
            None => serde_json::from_value(value).map(Self::Plain),
        };
        listing.map_err(de::Error::custom)
    }
}

impl FileListing {
    pub fn into_list(self) -> WireList<RawFileObject> {
        match self {
            Self::Paged { entries } => entries,
            Self::Plain(list) => list,
        }
    }
}

/// Signed one-shot download URL: `GET /api/client/servers/{uuid}/files/download`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSignedUrl {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl Resource for RawSignedUrl {
    type Relationships = NoRelationships;
}

// ── Backups ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBackup {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_successful: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_locked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ignored_files: StringOrList,
    pub checksum: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bytes: i64,
    pub created_at: Option<String>,
    /// Null while the backup is still running.
    pub completed_at: Option<String>,
}

impl Resource for RawBackup {
    type Relationships = NoRelationships;
}

// ── Databases ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDatabase {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub host: RawDatabaseHost,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub connections_from: StringOrList,
    pub max_connections: Option<i64>,
    pub relationships: Option<DatabaseRelationships>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawDatabaseHost {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
}

/// Only present when the request asked for `?include=password`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseRelationships {
    pub password: Option<Wire<RawDatabasePassword>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDatabasePassword {
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

impl Resource for RawDatabasePassword {
    type Relationships = NoRelationships;
}

impl Resource for RawDatabase {
    type Relationships = DatabaseRelationships;

    fn attach_relationships(&mut self, relationships: DatabaseRelationships) {
        if self.relationships.is_none() {
            self.relationships = Some(relationships);
        }
    }
}

// ── Schedules ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSchedule {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cron: RawCron,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_processing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub only_when_online: bool,
    pub last_run_at: Option<String>,
    pub next_run_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub relationships: Option<ScheduleRelationships>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawCron {
    #[serde(deserialize_with = "null_as_default")]
    pub minute: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hour: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day_of_month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day_of_week: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleRelationships {
    pub tasks: Option<WireList<RawTask>>,
}

impl Resource for RawSchedule {
    type Relationships = ScheduleRelationships;

    fn attach_relationships(&mut self, relationships: ScheduleRelationships) {
        if self.relationships.is_none() {
            self.relationships = Some(relationships);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTask {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sequence_id: i64,
    /// `command`, `power`, or `backup`.
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_offset: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_queued: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub continue_on_failure: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Resource for RawTask {
    type Relationships = NoRelationships;
}

// ── Request bodies ───────────────────────────────────────────────────

/// Body for `POST /api/client/servers/{uuid}/backups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBackupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_files: Vec<String>,
    pub is_locked: bool,
}

/// Body for `POST /api/client/servers/{uuid}/schedules[/{id}]`.
///
/// `id` selects update over create and is sent in the path, not the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    pub only_when_online: bool,
    pub is_active: bool,
}

/// Body for `POST /api/client/servers/{uuid}/files/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFilesRequest {
    pub root: String,
    pub files: Vec<String>,
}
