// ── API-to-domain type conversions ──
//
// Bridges raw `panel_api::wire` types into `crate::model` domain types.
// Every conversion is total: unparseable timestamps become `None`,
// loosely typed numbers fall back to zero, and unexpanded relationships
// become empty lists.

use chrono::{DateTime, Utc};
use tracing::debug;

use panel_api::wire::{
    NumberOrString, RawAllocation, RawBackup, RawDatabase, RawEggVariable, RawFileObject,
    RawSchedule, RawServer, RawServerStats, RawSignedUrl, RawTask, Resource, StringOrList,
    WireList,
};

use crate::model::{
    Allocation, CronSpec, DownloadUrl, EggVariable, FeatureLimits, FileObject, Schedule, Server,
    ServerBackup, ServerDatabase, ServerLimits, ServerState, ServerStats, ServerStatus, SftpDetails,
    Task,
};
use crate::pagination::PaginatedResult;

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an RFC 3339 timestamp, dropping anything unparseable.
fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Empty strings carry no information on optional text fields.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn to_port(value: i64) -> u16 {
    u16::try_from(value).unwrap_or(0)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn number_to_u64(raw: &NumberOrString) -> u64 {
    match raw {
        NumberOrString::Unsigned(n) => *n,
        NumberOrString::Float(f) if f.is_finite() && *f > 0.0 => f.trunc() as u64,
        NumberOrString::Float(_) => 0,
        NumberOrString::Text(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f > 0.0)
                        .map(|f| f.trunc() as u64)
                })
                .unwrap_or(0)
        }
    }
}

/// Mode bits arrive as octal digits (`"644"`) and are kept as the same
/// digits in a number.
fn number_to_u32(raw: &NumberOrString) -> u32 {
    u32::try_from(number_to_u64(raw)).unwrap_or(0)
}

fn split_list(raw: StringOrList, separator: char) -> Vec<String> {
    match raw {
        StringOrList::List(items) => items,
        StringOrList::Joined(joined) => joined
            .split(separator)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}

fn unwrap_list<R: Resource, T: From<R>>(list: Option<WireList<R>>) -> Vec<T> {
    list.map(|l| l.into_parts().0.into_iter().map(T::from).collect())
        .unwrap_or_default()
}

// ── Envelopes and lists ────────────────────────────────────────────

impl<R, T> From<WireList<R>> for PaginatedResult<T>
where
    R: Resource,
    T: From<R>,
{
    fn from(list: WireList<R>) -> Self {
        let (items, meta) = list.into_parts();
        let items = items.into_iter().map(T::from).collect();
        PaginatedResult::from_list(items, meta.as_ref())
    }
}

// ── Server ─────────────────────────────────────────────────────────

impl From<RawServer> for Server {
    fn from(raw: RawServer) -> Self {
        let status = raw
            .status
            .as_deref()
            .and_then(|s| match s.parse::<ServerStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    debug!(status = s, "unknown server status, treating as usable");
                    None
                }
            });
        let (variables, allocations) = match raw.relationships {
            Some(rel) => (unwrap_list(rel.variables), unwrap_list(rel.allocations)),
            None => (Vec::new(), Vec::new()),
        };

        Server {
            id: raw.identifier,
            internal_id: raw.internal_id,
            uuid: raw.uuid,
            name: raw.name,
            node: raw.node,
            is_node_under_maintenance: raw.is_node_under_maintenance,
            status,
            invocation: raw.invocation,
            docker_image: raw.docker_image,
            sftp_details: SftpDetails {
                ip: raw.sftp_details.ip,
                port: to_port(raw.sftp_details.port),
            },
            description: non_empty(raw.description),
            limits: ServerLimits {
                memory: non_negative(raw.limits.memory),
                swap: raw.limits.swap,
                disk: non_negative(raw.limits.disk),
                io: raw.limits.io.map(non_negative),
                cpu: non_negative(raw.limits.cpu),
                threads: non_empty(raw.limits.threads),
                oom_disabled: raw.limits.oom_disabled.unwrap_or(false),
            },
            egg_features: raw.egg_features.unwrap_or_default(),
            feature_limits: FeatureLimits {
                databases: to_u32(raw.feature_limits.databases),
                allocations: to_u32(raw.feature_limits.allocations),
                backups: to_u32(raw.feature_limits.backups),
            },
            is_transferring: raw.is_transferring,
            variables,
            allocations,
        }
    }
}

impl From<RawAllocation> for Allocation {
    fn from(raw: RawAllocation) -> Self {
        Allocation {
            id: raw.id,
            ip: raw.ip,
            alias: non_empty(raw.ip_alias),
            port: to_port(raw.port),
            notes: non_empty(raw.notes),
            is_default: raw.is_default,
        }
    }
}

impl From<RawEggVariable> for EggVariable {
    fn from(raw: RawEggVariable) -> Self {
        EggVariable {
            name: raw.name,
            description: non_empty(raw.description),
            env_variable: raw.env_variable,
            default_value: raw.default_value,
            server_value: raw.server_value,
            is_editable: raw.is_editable,
            rules: split_list(raw.rules, '|'),
        }
    }
}

// ── Stats ──────────────────────────────────────────────────────────

impl From<RawServerStats> for ServerStats {
    fn from(raw: RawServerStats) -> Self {
        let status = raw.current_state.parse().unwrap_or_else(|_| {
            debug!(state = %raw.current_state, "unknown power state, assuming offline");
            ServerState::Offline
        });
        let r = raw.resources;

        ServerStats {
            status,
            is_suspended: raw.is_suspended,
            memory_usage_bytes: r.memory_bytes,
            cpu_usage_percent: r.cpu_absolute,
            disk_usage_bytes: r.disk_bytes,
            network_rx_bytes: r.network_rx_bytes,
            network_tx_bytes: r.network_tx_bytes,
            uptime_ms: r.uptime,
        }
    }
}

// ── Files ──────────────────────────────────────────────────────────

impl From<RawFileObject> for FileObject {
    fn from(raw: RawFileObject) -> Self {
        let prefix = if raw.is_file { "file" } else { "dir" };

        FileObject {
            key: format!("{prefix}_{}", raw.name),
            mode_bits: number_to_u32(&raw.mode_bits),
            size: number_to_u64(&raw.size),
            created_at: parse_datetime(raw.created_at.as_deref()),
            modified_at: parse_datetime(raw.modified_at.as_deref()),
            name: raw.name,
            mode: raw.mode,
            is_file: raw.is_file,
            is_symlink: raw.is_symlink,
            mimetype: raw.mimetype,
        }
    }
}

impl From<RawSignedUrl> for DownloadUrl {
    fn from(raw: RawSignedUrl) -> Self {
        DownloadUrl { url: raw.url }
    }
}

// ── Backups ────────────────────────────────────────────────────────

impl From<RawBackup> for ServerBackup {
    fn from(raw: RawBackup) -> Self {
        ServerBackup {
            uuid: raw.uuid,
            is_successful: raw.is_successful,
            is_locked: raw.is_locked,
            name: raw.name,
            ignored_files: split_list(raw.ignored_files, '\n'),
            checksum: non_empty(raw.checksum),
            bytes: non_negative(raw.bytes),
            created_at: parse_datetime(raw.created_at.as_deref()),
            completed_at: parse_datetime(raw.completed_at.as_deref()),
        }
    }
}

// ── Databases ──────────────────────────────────────────────────────

impl From<RawDatabase> for ServerDatabase {
    fn from(raw: RawDatabase) -> Self {
        let password = raw
            .relationships
            .and_then(|rel| rel.password)
            .map(|wire| wire.into_inner().password)
            .filter(|p| !p.is_empty());

        ServerDatabase {
            id: raw.id,
            name: raw.name,
            username: raw.username,
            connection_string: format!("{}:{}", raw.host.address, raw.host.port),
            allow_connections_from: split_list(raw.connections_from, ','),
            max_connections: raw.max_connections.map(to_u32),
            password,
        }
    }
}

// ── Schedules ──────────────────────────────────────────────────────

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        Task {
            id: raw.id,
            sequence_id: raw.sequence_id,
            action: raw.action,
            payload: raw.payload,
            time_offset: raw.time_offset,
            is_queued: raw.is_queued,
            continue_on_failure: raw.continue_on_failure,
            created_at: parse_datetime(raw.created_at.as_deref()),
            updated_at: parse_datetime(raw.updated_at.as_deref()),
        }
    }
}

impl From<RawSchedule> for Schedule {
    fn from(raw: RawSchedule) -> Self {
        let mut tasks: Vec<Task> = unwrap_list(raw.relationships.and_then(|rel| rel.tasks));
        tasks.sort_by_key(|t| t.sequence_id);

        Schedule {
            id: raw.id,
            name: raw.name,
            cron: CronSpec {
                minute: raw.cron.minute,
                hour: raw.cron.hour,
                day_of_month: raw.cron.day_of_month,
                month: raw.cron.month,
                day_of_week: raw.cron.day_of_week,
            },
            is_active: raw.is_active,
            is_processing: raw.is_processing,
            only_when_online: raw.only_when_online,
            last_run_at: parse_datetime(raw.last_run_at.as_deref()),
            next_run_at: parse_datetime(raw.next_run_at.as_deref()),
            created_at: parse_datetime(raw.created_at.as_deref()),
            updated_at: parse_datetime(raw.updated_at.as_deref()),
            tasks,
        }
    }
}
