//! The API key record and its serialized form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated demo API key.
///
/// Serialized with camelCase field names and an RFC 3339 `createdAt`, the
/// same layout the browser widget keeps in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRecord {
    /// Unique id, ordered by creation time.
    pub id: String,
    /// The key value, e.g. `LP-3fa94c0e7b21`.
    pub key: String,
    /// User label.
    pub name: String,
    /// Network the key was issued for.
    pub network_uuid: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    /// Display only, not enforced.
    pub rate_limit: String,
    /// Display only, not enforced.
    pub expires_in: String,
}

/// Snapshot of one record as shown in its details view.
///
/// Holding a `KeyDetails` is how a caller keeps a record selected between
/// opening it and committing a toggle or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDetails {
    pub id: String,
    pub key: String,
    pub name: String,
    pub network_uuid: String,
    /// Illustrative endpoint; nothing is served there.
    pub endpoint: String,
    pub is_active: bool,
    pub rate_limit: String,
    pub expires_in: String,
    pub created_at: DateTime<Utc>,
}

impl KeyDetails {
    pub fn new(record: &ApiKeyRecord, endpoint_base: &str) -> Self {
        Self {
            id: record.id.clone(),
            key: record.key.clone(),
            name: record.name.clone(),
            network_uuid: record.network_uuid.clone(),
            endpoint: format!("{}{}", endpoint_base, record.key),
            is_active: record.is_active,
            rate_limit: record.rate_limit.clone(),
            expires_in: record.expires_in.clone(),
            created_at: record.created_at,
        }
    }
}
