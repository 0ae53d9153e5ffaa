// ── API call wrappers ──
//
// One method per panel operation. Each performs exactly one request,
// runs the response through `crate::convert`, and hands back domain
// values. Errors are returned exactly as `panel_api` produced them.

use panel_api::wire::{CreateBackupRequest, DeleteFilesRequest, ScheduleRequest};
use panel_api::{ApiClient, Error};

use crate::config::ClientConfig;
use crate::model::{
    Allocation, CronSpec, DownloadUrl, FileObject, Schedule, Server, ServerBackup, ServerDatabase,
    ServerStats,
};
use crate::pagination::PaginatedResult;

/// Input for creating a backup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBackup {
    /// Panel generates a timestamped name when `None`.
    pub name: Option<String>,
    pub ignored_files: Vec<String>,
    pub is_locked: bool,
}

/// Input for creating (`id: None`) or updating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSchedule {
    pub id: Option<i64>,
    pub name: String,
    pub cron: CronSpec,
    pub only_when_online: bool,
    pub is_active: bool,
}

impl From<&CreateBackup> for CreateBackupRequest {
    fn from(input: &CreateBackup) -> Self {
        CreateBackupRequest {
            name: input.name.clone().filter(|n| !n.is_empty()),
            ignored_files: input.ignored_files.clone(),
            is_locked: input.is_locked,
        }
    }
}

impl From<&SaveSchedule> for ScheduleRequest {
    fn from(input: &SaveSchedule) -> Self {
        ScheduleRequest {
            id: input.id,
            name: input.name.clone(),
            minute: input.cron.minute.clone(),
            hour: input.cron.hour.clone(),
            day_of_month: input.cron.day_of_month.clone(),
            month: input.cron.month.clone(),
            day_of_week: input.cron.day_of_week.clone(),
            only_when_online: input.only_when_online,
            is_active: input.is_active,
        }
    }
}

/// Typed facade over `panel_api::ApiClient`.
///
/// No caching, retry, or request de-duplication: two identical calls make
/// two requests and resolve independently.
#[derive(Debug, Clone)]
pub struct PanelClient {
    api: ApiClient,
    per_page: u32,
}

impl PanelClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            per_page: ClientConfig::DEFAULT_PER_PAGE,
        }
    }

    /// Build the HTTP client described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let api = ApiClient::new(config.url.as_str(), &config.transport())?;
        Ok(Self {
            api,
            per_page: config.per_page,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Default page size for file listings.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    // ── Servers ──────────────────────────────────────────────────────

    pub async fn list_servers(&self, page: u32) -> Result<PaginatedResult<Server>, Error> {
        Ok(self.api.list_servers(page.max(1)).await?.into())
    }

    pub async fn get_server(&self, uuid: &str) -> Result<Server, Error> {
        Ok(self.api.get_server(uuid).await?.into_inner().into())
    }

    pub async fn get_server_stats(&self, uuid: &str) -> Result<ServerStats, Error> {
        Ok(self.api.get_server_stats(uuid).await?.into_inner().into())
    }

    pub async fn list_allocations(&self, uuid: &str) -> Result<PaginatedResult<Allocation>, Error> {
        Ok(self.api.list_allocations(uuid).await?.into())
    }

    // ── Files ────────────────────────────────────────────────────────

    pub async fn list_files(
        &self,
        uuid: &str,
        directory: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PaginatedResult<FileObject>, Error> {
        let list = self
            .api
            .list_files(uuid, directory, page.max(1), per_page)
            .await?;
        Ok(list.into())
    }

    /// Delete `names` inside `root`. Resolves with nothing.
    pub async fn delete_files(&self, uuid: &str, root: &str, names: &[String]) -> Result<(), Error> {
        let body = DeleteFilesRequest {
            root: root.to_owned(),
            files: names.to_vec(),
        };
        self.api.delete_files(uuid, &body).await
    }

    pub async fn download_file(
        &self,
        uuid: &str,
        root: &str,
        paths: &[String],
        is_directory: bool,
    ) -> Result<DownloadUrl, Error> {
        Ok(self
            .api
            .download_file(uuid, root, paths, is_directory)
            .await?
            .into_inner()
            .into())
    }

    // ── Backups ──────────────────────────────────────────────────────

    pub async fn list_backups(
        &self,
        uuid: &str,
        page: u32,
    ) -> Result<PaginatedResult<ServerBackup>, Error> {
        Ok(self.api.list_backups(uuid, page.max(1)).await?.into())
    }

    /// Resolves with the backup as created (usually still in progress), or
    /// `None` when the panel answered with an empty body.
    pub async fn create_backup(
        &self,
        uuid: &str,
        input: &CreateBackup,
    ) -> Result<Option<ServerBackup>, Error> {
        let body = CreateBackupRequest::from(input);
        let created = self.api.create_backup(uuid, &body).await?;
        Ok(created.map(|doc| doc.into_inner().into()))
    }

    /// Resolves with nothing.
    pub async fn delete_backup(&self, uuid: &str, backup: &str) -> Result<(), Error> {
        self.api.delete_backup(uuid, backup).await
    }

    // ── Schedules ────────────────────────────────────────────────────

    pub async fn list_schedules(&self, uuid: &str) -> Result<PaginatedResult<Schedule>, Error> {
        Ok(self.api.list_schedules(uuid).await?.into())
    }

    pub async fn get_schedule(&self, uuid: &str, id: i64) -> Result<Schedule, Error> {
        Ok(self.api.get_schedule(uuid, id).await?.into_inner().into())
    }

    /// Resolves with the created or updated schedule, or `None` when the
    /// panel answered with an empty body.
    pub async fn save_schedule(
        &self,
        uuid: &str,
        input: &SaveSchedule,
    ) -> Result<Option<Schedule>, Error> {
        let body = ScheduleRequest::from(input);
        let saved = self.api.save_schedule(uuid, &body).await?;
        Ok(saved.map(|doc| doc.into_inner().into()))
    }

    /// Resolves with nothing.
    pub async fn delete_schedule(&self, uuid: &str, id: i64) -> Result<(), Error> {
        self.api.delete_schedule(uuid, id).await
    }

    // ── Databases ────────────────────────────────────────────────────

    /// Lists databases with their passwords expanded.
    pub async fn list_databases(
        &self,
        uuid: &str,
    ) -> Result<PaginatedResult<ServerDatabase>, Error> {
        Ok(self.api.list_databases(uuid).await?.into())
    }

    /// Resolves with nothing.
    pub async fn delete_database(&self, uuid: &str, id: &str) -> Result<(), Error> {
        self.api.delete_database(uuid, id).await
    }
}
