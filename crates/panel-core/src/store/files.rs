// ── File browser slice ──

use std::sync::Arc;

use crate::model::{FileObject, ServerBackup};
use crate::pagination::PaginatedResult;
use crate::stream::SliceStream;

use super::slice::{FetchTicket, SliceCell};

/// Snapshot of the file browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesState {
    pub browsing_directory: String,
    /// Set while browsing the contents of a backup instead of the live
    /// filesystem.
    pub browsing_backup: Option<ServerBackup>,
    pub browsing_entries: PaginatedResult<FileObject>,
    /// Independent of `browsing_entries`: removing a listing entry leaves
    /// the selection alone.
    pub selected_files: Vec<FileObject>,
}

impl Default for FilesState {
    fn default() -> Self {
        Self {
            browsing_directory: "/".to_owned(),
            browsing_backup: None,
            browsing_entries: PaginatedResult::empty(),
            selected_files: Vec::new(),
        }
    }
}

pub struct FilesSlice {
    cell: SliceCell<Arc<FilesState>>,
}

impl FilesSlice {
    pub(crate) fn new(initial: FilesState) -> Self {
        Self {
            cell: SliceCell::new("files", Arc::new(initial)),
        }
    }

    pub fn state(&self) -> Arc<FilesState> {
        self.cell.get()
    }

    pub fn subscribe(&self) -> SliceStream<Arc<FilesState>> {
        self.cell.subscribe()
    }

    pub fn browsing_directory(&self) -> String {
        self.state().browsing_directory.clone()
    }

    // ── Listing ──────────────────────────────────────────────────────

    /// Navigate. Any listing fetch still in flight for the previous
    /// directory becomes stale.
    pub fn set_browsing_directory(&self, directory: impl Into<String>) {
        let directory = directory.into();
        self.cell.invalidate();
        self.cell.modify(|s| {
            s.browsing_directory = directory;
            true
        });
    }

    /// Start a listing fetch for `directory`. The selection is cleared and,
    /// when the directory changes, so is the listing: until the fetch
    /// commits the state shows the new directory as empty rather than the
    /// old directory's entries.
    pub fn navigate(&self, directory: impl Into<String>) -> FetchTicket {
        let directory = directory.into();
        let ticket = self.cell.begin_fetch();
        self.cell.modify(|s| {
            if s.browsing_directory != directory {
                s.browsing_directory = directory;
                s.browsing_entries = PaginatedResult::empty();
            }
            s.selected_files.clear();
            true
        });
        ticket
    }

    pub fn set_browsing_backup(&self, backup: Option<ServerBackup>) {
        self.cell.modify(|s| {
            s.browsing_backup = backup;
            true
        });
    }

    /// Replace the listing wholesale.
    pub fn set_browsing_entries(&self, entries: PaginatedResult<FileObject>) {
        self.cell.modify(|s| {
            s.browsing_entries = entries;
            true
        });
    }

    /// Append an entry after a local create or upload; `total_items` +1.
    pub fn add_browsing_entry(&self, entry: FileObject) {
        self.cell.modify(|s| {
            s.browsing_entries.push(entry);
            true
        });
    }

    /// Drop the entry named `name`; `total_items` −1 when one was removed.
    pub fn remove_browsing_entry(&self, name: &str) {
        self.cell
            .modify(|s| s.browsing_entries.retain(|e| e.name != name) > 0);
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn set_selected_files(&self, files: Vec<FileObject>) {
        self.cell.modify(|s| {
            s.selected_files = files;
            true
        });
    }

    pub fn add_selected_file(&self, file: FileObject) {
        self.cell.modify(|s| {
            s.selected_files.push(file);
            true
        });
    }

    pub fn remove_selected_file(&self, name: &str) {
        self.cell.modify(|s| {
            let before = s.selected_files.len();
            s.selected_files.retain(|f| f.name != name);
            s.selected_files.len() != before
        });
    }

    // ── Sequencing ───────────────────────────────────────────────────

    pub fn begin_fetch(&self) -> FetchTicket {
        self.cell.begin_fetch()
    }

    /// Apply a listing fetched under `ticket`, unless the directory changed
    /// or a newer fetch started since.
    pub fn commit_browsing_entries(
        &self,
        ticket: FetchTicket,
        entries: PaginatedResult<FileObject>,
    ) -> bool {
        self.cell
            .commit_with(ticket, |_| self.set_browsing_entries(entries))
    }

    pub(crate) fn reset(&self) {
        self.cell.invalidate();
        self.cell.replace(Arc::new(FilesState::default()));
    }
}
