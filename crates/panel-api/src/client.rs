// Async HTTP client for the panel's client API.
//
// Base path: /api/client/
// Auth: bearer key injected by `TransportConfig`, or whatever the caller
// baked into the `reqwest::Client` passed to `from_reqwest`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::wire::{
    CreateBackupRequest, DeleteFilesRequest, Document, FileListing, RawAllocation, RawBackup,
    RawDatabase, RawFileObject, RawSchedule, RawServer, RawServerStats, RawSignedUrl,
    ScheduleRequest, WireList,
};

// ── Error response shape ─────────────────────────────────────────────

/// `{"errors": [{"detail": "..."}]}` or `{"errors": ["..."]}`.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ErrorItem {
    Detailed {
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
    Plain(String),
}

impl ErrorItem {
    fn into_message(self) -> Option<String> {
        match self {
            Self::Detailed { detail, code } => detail.or(code),
            Self::Plain(message) => Some(message),
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the panel's `/api/client` endpoints.
///
/// Every method performs exactly one request and returns the raw wire
/// value. No caching, retry, or request de-duplication happens here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a panel URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Panels may be mounted under a sub-path, so keep the path and make
    /// sure it ends with `/` for `Url::join`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL. Each segment is
    /// percent-encoded on its own, so an id carrying `/` or `?` stays a
    /// single segment.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::InvalidPath(format!("path segment {bad:?}")));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidPath(format!("{} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `api/client/servers/{uuid}` followed by `tail`.
    fn server_url(&self, uuid: &str, tail: &[&str]) -> Result<Url, Error> {
        let mut segments = vec!["api", "client", "servers", uuid];
        segments.extend_from_slice(tail);
        self.url(&segments)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    /// POST to a route that may answer with the saved resource or with an
    /// empty body (`""`, `{}`, `null`). The latter resolves to `None`.
    async fn post_optional<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<T>, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        if is_empty_body(&body) {
            debug!("empty response body");
            return Ok(None);
        }
        decode(body).map(Some)
    }

    async fn post_no_response<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<(), Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            decode(resp.text().await?)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();

        let messages = serde_json::from_str::<ErrorResponse>(&body)
            .map(|err| {
                err.errors
                    .into_iter()
                    .filter_map(ErrorItem::into_message)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let messages = if messages.is_empty() {
            vec![status.to_string()]
        } else {
            messages
        };

        Error::Http {
            status: status.as_u16(),
            messages,
            body,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Servers ──────────────────────────────────────────────────────

    pub async fn list_servers(&self, page: u32) -> Result<WireList<RawServer>, Error> {
        let url = self.url(&["api", "client"])?;
        self.get_with_params(url, &[("page", page.to_string())])
            .await
    }

    pub async fn get_server(&self, uuid: &str) -> Result<Document<RawServer>, Error> {
        self.get(self.server_url(uuid, &[])?).await
    }

    pub async fn get_server_stats(&self, uuid: &str) -> Result<Document<RawServerStats>, Error> {
        self.get(self.server_url(uuid, &["resources"])?).await
    }

    pub async fn list_allocations(&self, uuid: &str) -> Result<WireList<RawAllocation>, Error> {
        self.get(self.server_url(uuid, &["network", "allocations"])?)
            .await
    }

    // ── Files ────────────────────────────────────────────────────────

    pub async fn list_files(
        &self,
        uuid: &str,
        directory: &str,
        page: u32,
        per_page: u32,
    ) -> Result<WireList<RawFileObject>, Error> {
        let listing: FileListing = self
            .get_with_params(
                self.server_url(uuid, &["files", "list"])?,
                &[
                    ("directory", directory.to_owned()),
                    ("page", page.to_string()),
                    ("per_page", per_page.to_string()),
                ],
            )
            .await?;
        Ok(listing.into_list())
    }

    pub async fn delete_files(&self, uuid: &str, body: &DeleteFilesRequest) -> Result<(), Error> {
        self.post_no_response(self.server_url(uuid, &["files", "delete"])?, body)
            .await
    }

    /// Request a signed download URL. Multiple paths, or a directory, are
    /// archived by the daemon before download.
    pub async fn download_file(
        &self,
        uuid: &str,
        root: &str,
        paths: &[String],
        is_directory: bool,
    ) -> Result<Document<RawSignedUrl>, Error> {
        let mut params = vec![("root", root.to_owned())];
        params.extend(paths.iter().map(|p| ("files", p.clone())));
        params.push(("directory", is_directory.to_string()));

        self.get_with_params(self.server_url(uuid, &["files", "download"])?, &params)
            .await
    }

    // ── Backups ──────────────────────────────────────────────────────

    pub async fn list_backups(&self, uuid: &str, page: u32) -> Result<WireList<RawBackup>, Error> {
        self.get_with_params(
            self.server_url(uuid, &["backups"])?,
            &[("page", page.to_string())],
        )
        .await
    }

    /// `None` when the panel accepted the backup without echoing it.
    pub async fn create_backup(
        &self,
        uuid: &str,
        body: &CreateBackupRequest,
    ) -> Result<Option<Document<RawBackup>>, Error> {
        self.post_optional(self.server_url(uuid, &["backups"])?, body)
            .await
    }

    pub async fn delete_backup(&self, uuid: &str, backup: &str) -> Result<(), Error> {
        self.delete(self.server_url(uuid, &["backups", backup])?)
            .await
    }

    // ── Schedules ────────────────────────────────────────────────────

    pub async fn list_schedules(&self, uuid: &str) -> Result<WireList<RawSchedule>, Error> {
        self.get(self.server_url(uuid, &["schedules"])?).await
    }

    pub async fn get_schedule(&self, uuid: &str, id: i64) -> Result<Document<RawSchedule>, Error> {
        let id = id.to_string();
        self.get(self.server_url(uuid, &["schedules", id.as_str()])?)
            .await
    }

    /// Create a schedule, or update it when `body.id` is a positive id.
    /// `None` when the panel saved it without echoing the schedule back.
    pub async fn save_schedule(
        &self,
        uuid: &str,
        body: &ScheduleRequest,
    ) -> Result<Option<Document<RawSchedule>>, Error> {
        let url = match body.id {
            Some(id) if id > 0 => self.server_url(uuid, &["schedules", id.to_string().as_str()])?,
            _ => self.server_url(uuid, &["schedules"])?,
        };
        self.post_optional(url, body).await
    }

    pub async fn delete_schedule(&self, uuid: &str, id: i64) -> Result<(), Error> {
        let id = id.to_string();
        self.delete(self.server_url(uuid, &["schedules", id.as_str()])?)
            .await
    }

    // ── Databases ────────────────────────────────────────────────────

    pub async fn list_databases(&self, uuid: &str) -> Result<WireList<RawDatabase>, Error> {
        self.get_with_params(
            self.server_url(uuid, &["databases"])?,
            &[("include", "password".to_owned())],
        )
        .await
    }

    pub async fn delete_database(&self, uuid: &str, id: &str) -> Result<(), Error> {
        self.delete(self.server_url(uuid, &["databases", id])?)
            .await
    }
}

/// Decode a success body, keeping a preview of it in the error.
fn decode<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

/// Whitespace, `null`, or `{}`.
fn is_empty_body(body: &str) -> bool {
    if body.trim().is_empty() {
        return true;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => true,
        Ok(serde_json::Value::Object(map)) => map.is_empty(),
        _ => false,
    }
}
