// ── Store synchronization ──
//
// Glue between `PanelClient` and `ServerStore`: fetch, transform, commit.
// Every fetch takes a ticket first and commits through it, so a response
// that arrives after a newer request (or after navigation) is dropped
// instead of overwriting newer state. Mutations have no ticket; their
// results are applied only if the same server (and, for files, the same
// directory) is still showing.

use std::sync::Arc;

use tracing::debug;

use crate::client::{CreateBackup, PanelClient, SaveSchedule};
use crate::error::CoreError;
use crate::model::{Schedule, ServerBackup};
use crate::store::ServerStore;

/// Drives a `ServerStore` from the panel API.
#[derive(Clone)]
pub struct ServerSync {
    client: PanelClient,
    store: Arc<ServerStore>,
}

impl ServerSync {
    pub fn new(client: PanelClient, store: Arc<ServerStore>) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &PanelClient {
        &self.client
    }

    pub fn store(&self) -> &Arc<ServerStore> {
        &self.store
    }

    fn uuid(&self) -> Result<String, CoreError> {
        self.store.server().uuid().ok_or(CoreError::NoServerLoaded)
    }

    /// Whether `uuid` is still the loaded server. Mutation results are only
    /// folded into the store while this holds.
    fn still_loaded(&self, uuid: &str) -> bool {
        let loaded = self.store.server().uuid().as_deref() == Some(uuid);
        if !loaded {
            debug!(uuid, "server changed during request, not applying result");
        }
        loaded
    }

    // ── Server ───────────────────────────────────────────────────────

    /// Load a server. Switching to a different server resets every slice
    /// first so nothing from the previous one leaks through.
    ///
    /// Returns whether the result was committed.
    pub async fn load_server(&self, uuid: &str) -> Result<bool, CoreError> {
        if self.store.server().uuid().as_deref() != Some(uuid) {
            debug!(uuid, "switching server, resetting store");
            self.store.reset();
        }

        let ticket = self.store.server().begin_fetch();
        let server = self.client.get_server(uuid).await?;
        Ok(self.store.server().commit_server(ticket, server))
    }

    /// Refetch the allocation list and fold it into the loaded server.
    pub async fn refresh_allocations(&self) -> Result<(), CoreError> {
        let uuid = self.uuid()?;
        let allocations = self.client.list_allocations(&uuid).await?;
        if self.still_loaded(&uuid) {
            self.store.server().set_allocations(allocations.items);
        }
        Ok(())
    }

    pub async fn refresh_stats(&self) -> Result<bool, CoreError> {
        let uuid = self.uuid()?;
        let ticket = self.store.stats().begin_fetch();
        let stats = self.client.get_server_stats(&uuid).await?;
        Ok(self.store.stats().commit_stats(ticket, stats))
    }

    // ── Files ────────────────────────────────────────────────────────

    /// Navigate to `directory` and load one page of it. On failure the
    /// state shows `directory` with no entries.
    pub async fn browse(&self, directory: &str, page: u32) -> Result<bool, CoreError> {
        let uuid = self.uuid()?;
        let files = self.store.files();
        let ticket = files.navigate(directory);

        let entries = self
            .client
            .list_files(&uuid, directory, page, self.client.per_page())
            .await?;
        Ok(files.commit_browsing_entries(ticket, entries))
    }

    /// Delete entries from the current directory, then drop them from the
    /// listing and the selection without a refetch.
    pub async fn delete_files(&self, names: &[String]) -> Result<(), CoreError> {
        let uuid = self.uuid()?;
        let files = self.store.files();
        let root = files.browsing_directory();

        self.client.delete_files(&uuid, &root, names).await?;

        if !self.still_loaded(&uuid) {
            return Ok(());
        }
        if files.browsing_directory() != root {
            debug!(root, "directory changed during delete, not applying result");
            return Ok(());
        }
        for name in names {
            files.remove_browsing_entry(name);
            files.remove_selected_file(name);
        }
        debug!(count = names.len(), root, "removed deleted entries from listing");
        Ok(())
    }

    // ── Backups ──────────────────────────────────────────────────────

    pub async fn refresh_backups(&self, page: u32) -> Result<bool, CoreError> {
        let uuid = self.uuid()?;
        let ticket = self.store.backups().begin_fetch();
        let backups = self.client.list_backups(&uuid, page).await?;
        Ok(self.store.backups().commit_backups(ticket, backups))
    }

    /// Create a backup and append it to the stored page. When the panel
    /// does not echo the backup, the current page is refetched instead and
    /// `None` is returned.
    pub async fn create_backup(
        &self,
        input: &CreateBackup,
    ) -> Result<Option<ServerBackup>, CoreError> {
        let uuid = self.uuid()?;
        let created = self.client.create_backup(&uuid, input).await?;
        if !self.still_loaded(&uuid) {
            return Ok(created);
        }

        match created {
            Some(backup) => {
                self.store.backups().add_backup(backup.clone());
                Ok(Some(backup))
            }
            None => {
                let page = self.store.backups().backups().pagination.current_page;
                self.refresh_backups(page).await?;
                Ok(None)
            }
        }
    }

    pub async fn delete_backup(&self, backup: &str) -> Result<(), CoreError> {
        let uuid = self.uuid()?;
        self.client.delete_backup(&uuid, backup).await?;
        if self.still_loaded(&uuid) {
            self.store.backups().remove_backup(backup);
        }
        Ok(())
    }

    // ── Schedules ────────────────────────────────────────────────────

    pub async fn refresh_schedules(&self) -> Result<bool, CoreError> {
        let uuid = self.uuid()?;
        let ticket = self.store.schedules().begin_fetch();
        let schedules = self.client.list_schedules(&uuid).await?;
        Ok(self
            .store
            .schedules()
            .commit_schedules(ticket, schedules.items))
    }

    /// Create or update, then mirror the saved schedule into the store.
    ///
    /// When the panel answers without the schedule, the list is refetched
    /// and the stored copy of an updated schedule is returned. A create
    /// answered that way resolves to `None`.
    pub async fn save_schedule(
        &self,
        input: &SaveSchedule,
    ) -> Result<Option<Schedule>, CoreError> {
        let uuid = self.uuid()?;
        let saved = self.client.save_schedule(&uuid, input).await?;
        if !self.still_loaded(&uuid) {
            return Ok(saved);
        }

        match saved {
            Some(schedule) => {
                self.store.schedules().upsert_schedule(schedule.clone());
                Ok(Some(schedule))
            }
            None => {
                self.refresh_schedules().await?;
                Ok(input
                    .id
                    .filter(|id| *id > 0)
                    .and_then(|id| self.store.schedules().get(id)))
            }
        }
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<(), CoreError> {
        let uuid = self.uuid()?;
        self.client.delete_schedule(&uuid, id).await?;
        if self.still_loaded(&uuid) {
            self.store.schedules().remove_schedule(id);
        }
        Ok(())
    }
}
