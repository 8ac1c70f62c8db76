pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod patch;
pub mod update;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::Page;
use time::OffsetDateTime;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskList {
    /// Task list identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ETag of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Title of the task list. Maximum length allowed: 1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Last modification time of the task list.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated: Option<OffsetDateTime>,
    /// URL pointing to this task list. Used to retrieve, update, or delete this task list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Type of the resource. This is always "tasks#taskList".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(TaskList);

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskLists {
    /// Collection of task lists.
    pub items: Vec<TaskList>,
    /// Token that can be used to request the next page of this result.
    pub next_page_token: Option<String>,
    pub etag: Option<String>,
    /// Type of the resource. This is always "tasks#taskLists".
    pub kind: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(TaskLists);

impl Page for TaskLists {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}
