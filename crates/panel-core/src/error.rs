// ── Core error types ──
//
// Transport errors pass through untouched: turning them into user-facing
// text is the embedding application's job.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A server-scoped operation ran before `ServerSync::load_server`.
    #[error("No server loaded")]
    NoServerLoaded,

    /// The panel API call failed.
    #[error(transparent)]
    Api(#[from] panel_api::Error),
}

impl CoreError {
    /// The underlying transport error, if any.
    pub fn as_api(&self) -> Option<&panel_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            Self::NoServerLoaded => None,
        }
    }
}
