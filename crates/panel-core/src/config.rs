// ── Runtime connection configuration ──
//
// Describes how to reach a panel. Carries the API key and connection
// tuning but never touches disk; `panel-config` builds one from a profile.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use panel_api::{TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development panels).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Configuration for talking to a single panel.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Panel URL (e.g., `https://panel.example.com`).
    pub url: Url,
    /// Client API key, sent as a bearer token. `None` when the caller
    /// injects auth into its own `reqwest::Client`.
    pub api_key: Option<SecretString>,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Page size for file listings.
    pub per_page: u32,
}

impl ClientConfig {
    pub const DEFAULT_PER_PAGE: u32 = 50;

    pub fn new(url: Url) -> Self {
        Self {
            url,
            api_key: None,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::from(&self.tls),
            timeout: self.timeout,
            api_key: self.api_key.clone(),
        }
    }
}
