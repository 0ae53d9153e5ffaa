// panel-api: Async Rust client for the game server panel's client REST API.
//
// Returns raw wire types; the domain model and conversions live in
// `panel-core`.

pub mod client;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
