// ── Client domain store ──
//
// In-memory projection of the server being viewed. Each slice owns its
// own watch channel and fetch generation; slices never coordinate with
// each other.

mod backups;
mod files;
mod schedules;
mod server;
mod slice;
mod stats;

pub use backups::BackupsSlice;
pub use files::{FilesSlice, FilesState};
pub use schedules::SchedulesSlice;
pub use server::ServerSlice;
pub use slice::FetchTicket;
pub use stats::StatsSlice;

use tracing::debug;

use crate::model::{FileObject, Schedule, Server, ServerBackup, ServerStats};
use crate::pagination::PaginatedResult;

/// Seed values for `ServerStore::create`.
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    pub server: Option<Server>,
    pub stats: Option<ServerStats>,
    /// Defaults to `/`.
    pub browsing_directory: Option<String>,
    pub browsing_entries: PaginatedResult<FileObject>,
    pub schedules: Vec<Schedule>,
    pub backups: PaginatedResult<ServerBackup>,
}

/// The client domain store.
///
/// Constructed explicitly and shared behind an `Arc`; there is no global
/// instance. Every mutator is synchronous and infallible, and a mutation
/// that finds nothing to change leaves the snapshot untouched.
pub struct ServerStore {
    files: FilesSlice,
    server: ServerSlice,
    stats: StatsSlice,
    schedules: SchedulesSlice,
    backups: BackupsSlice,
}

impl ServerStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::create(InitialState::default())
    }

    pub fn create(initial: InitialState) -> Self {
        let mut files = FilesState {
            browsing_entries: initial.browsing_entries,
            ..FilesState::default()
        };
        if let Some(directory) = initial.browsing_directory {
            files.browsing_directory = directory;
        }

        Self {
            files: FilesSlice::new(files),
            server: ServerSlice::new(initial.server),
            stats: StatsSlice::new(initial.stats),
            schedules: SchedulesSlice::new(initial.schedules),
            backups: BackupsSlice::new(initial.backups),
        }
    }

    /// Tear down the store. Every outstanding subscription observes the
    /// end of its stream.
    pub fn dispose(self) {
        debug!(
            server = self.server.uuid().as_deref().unwrap_or("-"),
            "disposing server store"
        );
        drop(self);
    }

    pub fn files(&self) -> &FilesSlice {
        &self.files
    }

    pub fn server(&self) -> &ServerSlice {
        &self.server
    }

    pub fn stats(&self) -> &StatsSlice {
        &self.stats
    }

    pub fn schedules(&self) -> &SchedulesSlice {
        &self.schedules
    }

    pub fn backups(&self) -> &BackupsSlice {
        &self.backups
    }

    /// Return every slice to its empty state and invalidate all in-flight
    /// fetches. Used when switching to a different server.
    pub fn reset(&self) {
        self.server.clear_server();
        self.stats.clear_stats();
        self.files.reset();
        self.schedules.reset();
        self.backups.reset();
    }
}

impl Default for ServerStore {
    fn default() -> Self {
        Self::new()
    }
}
