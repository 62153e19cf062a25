//! Request and response payloads of the resource protocol

use crate::config::Source;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A version of the resource: one deployment, as seen by the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Deployment ID, formatted as a decimal string
    #[serde(default)]
    pub id: String,

    /// ETag of the deployment list the version was discovered in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,

    /// State of the deployment's latest status
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub statuses: String,
}

impl Version {
    /// Version for deployment `id` discovered with `etag`
    pub fn new(id: i64, etag: &str) -> Self {
        Self {
            id: id.to_string(),
            etag: etag.to_string(),
            statuses: String::new(),
        }
    }

    /// The ID as a number, or `None` when unset or malformed
    pub fn numeric_id(&self) -> Option<i64> {
        if self.id.is_empty() {
            return None;
        }
        match self.id.parse::<i64>() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(id = %self.id, error = %e, "ignoring unparseable version id");
                None
            }
        }
    }
}

/// Name/value pair shown by the orchestrator next to a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    pub name: String,
    pub value: String,
}

impl MetadataPair {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Payload of `check`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub source: Source,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: Version,
}

/// Payload of `in`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InRequest {
    #[serde(default)]
    pub source: Source,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: Version,
}

/// Result of `in`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InResponse {
    pub version: Version,
    pub metadata: Vec<MetadataPair>,
}

/// The orchestrator sends `"version": null` on the first check
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
