pub mod cancel;
pub mod get;
pub mod list;

use std::collections::HashMap;

use serde_json::Value;
use time::OffsetDateTime;

/// Metadata describing an import or export operation; read it with `Operation::metadata_as`.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationMetadata {
    /// The Google Cloud Project in which the job is scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// The time at which the job was submitted to the Genomics service.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<OffsetDateTime>,
    /// The time at which the job began to run.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<OffsetDateTime>,
    /// The time at which the job stopped running.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<OffsetDateTime>,
    /// The original request that started the operation.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub request: HashMap<String, Value>,
    /// Optional event messages that were generated during the job's execution.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<OperationEvent>,
    /// Optionally provided by the caller when submitting the request that creates the operation.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Runtime metadata on this Operation.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub runtime_metadata: HashMap<String, Value>,
}

/// An event that occurred during an Operation.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationEvent {
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<OffsetDateTime>,
    /// Required description of event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
