//! Client-side server-state layer for the game server panel.
//!
//! Sits between `panel-api` and whatever renders the data:
//!
//! - **Transformers** ([`convert`], [`case`], [`predicates`]) turn raw wire
//!   values into the domain [`model`]. They are total and never fail.
//!
//! - **[`Pagination`] / [`PaginatedResult`]** fold every backend's paging
//!   counters into one canonical shape.
//!
//! - **[`PanelClient`]** exposes one method per panel operation, each a
//!   single request returning domain values or the untouched transport
//!   error.
//!
//! - **[`ServerStore`]** is the reactive, explicitly constructed store for
//!   the server being viewed. Slices publish `Arc` snapshots over `watch`
//!   channels and hand out [`SliceStream`] subscriptions. [`FetchTicket`]s
//!   keep late responses from overwriting newer state.
//!
//! - **[`ServerSync`]** wires the client to the store.

pub mod case;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod pagination;
pub mod predicates;
pub mod size;
pub mod store;
pub mod stream;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::{CreateBackup, PanelClient, SaveSchedule};
pub use config::{ClientConfig, TlsVerification};
pub use error::CoreError;
pub use pagination::{PaginatedResult, Pagination};
pub use store::{
    BackupsSlice, FetchTicket, FilesSlice, FilesState, InitialState, SchedulesSlice, ServerSlice,
    ServerStore, StatsSlice,
};
pub use stream::{SliceStream, SliceWatchStream};
pub use sync::ServerSync;

pub use model::{
    Allocation, CronSpec, DownloadUrl, EggVariable, FeatureLimits, FileObject, Schedule, Server,
    ServerBackup, ServerDatabase, ServerLimits, ServerState, ServerStats, ServerStatus, SftpDetails,
    Task,
};
