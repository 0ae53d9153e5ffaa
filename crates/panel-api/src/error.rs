use thiserror::Error;

/// Top-level error type for the `panel-api` crate.
///
/// Every failure a single request can produce, from client setup and
/// URL building through to a non-success status or a body that does not
/// match the wire model.
/// Callers receive these exactly as produced; nothing above this crate
/// rewrites them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake, certificate, or client-builder error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A header value (the API key) contains bytes HTTP cannot carry.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// A path segment that would escape or collapse its route.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success HTTP status returned by the panel.
    ///
    /// `messages` holds whatever error details the backend put in its
    /// `errors` array (either `[{"detail": ...}]` or `["..."]`).
    #[error("Panel API error (HTTP {status}): {}", messages.join("; "))]
    Http {
        status: u16,
        messages: Vec<String>,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code, if the panel answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the panel rejected the session or key.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
