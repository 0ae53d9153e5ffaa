use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerBackup {
    pub uuid: String,
    pub is_successful: bool,
    pub is_locked: bool,
    pub name: String,
    pub ignored_files: Vec<String>,
    pub checksum: Option<String>,
    pub bytes: u64,
    pub created_at: Option<DateTime<Utc>>,
    /// `None` while the backup is still running.
    pub completed_at: Option<DateTime<Utc>>,
}

impl ServerBackup {
    pub fn is_in_progress(&self) -> bool {
        self.completed_at.is_none()
    }
}
