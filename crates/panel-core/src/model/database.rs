use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDatabase {
    pub id: String,
    pub name: String,
    pub username: String,
    /// `host:port`.
    pub connection_string: String,
    /// Source addresses or CIDRs allowed to connect; `%` means any.
    pub allow_connections_from: Vec<String>,
    pub max_connections: Option<u32>,
    /// Only present when the listing expanded the `password` relationship.
    pub password: Option<String>,
}
