// ── File manager types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// `name` is unique within one listing and is the key the store uses for
/// removal. `key` is a render key that stays distinct when a file and a
/// directory share a name across listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileObject {
    pub key: String,
    pub name: String,
    /// Symbolic mode, e.g. `-rw-r--r--`.
    pub mode: String,
    /// Octal digits as a number, e.g. `644`.
    pub mode_bits: u32,
    pub size: u64,
    pub is_file: bool,
    pub is_symlink: bool,
    pub mimetype: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// One-shot signed URL for downloading files straight from the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadUrl {
    pub url: String,
}
