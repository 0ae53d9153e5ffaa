// ── Domain model ──
//
// Plain owned values produced by `crate::convert`. None of these types
// hold a reference to the store that owns them, and derived predicates
// live in `crate::predicates` rather than on the types.

pub mod backup;
pub mod database;
pub mod file;
pub mod schedule;
pub mod server;
pub mod stats;

pub use backup::ServerBackup;
pub use database::ServerDatabase;
pub use file::{DownloadUrl, FileObject};
pub use schedule::{CronSpec, Schedule, Task};
pub use server::{
    Allocation, EggVariable, FeatureLimits, Server, ServerLimits, ServerStatus, SftpDetails,
};
pub use stats::{ServerState, ServerStats};
