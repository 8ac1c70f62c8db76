pub mod get;
pub mod list;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;

use crate::http::reports::{DateRange, ReportFormat};

/// Represents a File resource. A file contains the metadata for a report run. It shows the status of the run
/// and holds the URLs to the generated report data if the run is finished and the status is "REPORT_AVAILABLE".
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    /// The date range for which the file has report data. The date range will always be the absolute date
    /// range for which the report is run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The filename of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The output format of the report. Only available once the file is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// The unique ID of this report file.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    /// Identifies what kind of resource this is. Value: the fixed string "dfareporting#file".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The timestamp in milliseconds since epoch when this file was last modified.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<i64>,
    /// The ID of the report this file was generated from.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub report_id: Option<i64>,
    /// The status of the report file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    /// The URLs where the completed report file can be downloaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<FileUrls>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(File);

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    #[default]
    Processing,
    ReportAvailable,
    Failed,
    Cancelled,
    Queued,
    #[serde(other)]
    Unknown,
}

impl FileStatus {
    /// Whether the report run will not change any more.
    pub fn is_final(&self) -> bool {
        !matches!(self, FileStatus::Processing | FileStatus::Queued | FileStatus::Unknown)
    }
}

/// The URLs where the completed report file can be downloaded.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FileUrls {
    /// The URL for downloading the report data through the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// The URL for downloading the report data through a browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_url: Option<String>,
}

/// List of files for a report.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FileList {
    /// Etag of this resource.
    pub etag: Option<String>,
    /// The files returned in this response.
    pub items: Vec<File>,
    /// Identifies what kind of resource this is. Value: the fixed string "dfareporting#fileList".
    pub kind: Option<String>,
    /// Continuation token used to page through files. To retrieve the next page of results,
    /// set the next request's "pageToken" to the value of this field.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(FileList);

impl google_cloud_gax::paging::Page for FileList {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}
