pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod patch;
pub mod undelete;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use time::OffsetDateTime;

/// A Dataset is a collection of genomic data.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    /// The server-generated dataset ID, unique across all datasets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The Google Cloud project ID that this dataset belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// The dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The time this dataset was created.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<OffsetDateTime>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Dataset);
