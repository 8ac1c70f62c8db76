pub mod clear;
pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod move_task;
pub mod patch;
pub mod update;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::nullable::Nullable;
use google_cloud_gax::paging::Page;
use time::OffsetDateTime;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    /// Task identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ETag of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Title of the task. Maximum length allowed: 1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Parent task identifier. This field is omitted if it is a top-level task. Use `move` to move the task
    /// under a different parent or to the top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// String indicating the position of the task among its sibling tasks under the same parent task or at
    /// the top level. If this string is greater than another task's corresponding position string according
    /// to lexicographical ordering, the task is positioned after the other task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Notes describing the task. Maximum length allowed: 8192 characters.
    #[serde(skip_serializing_if = "Nullable::is_unset")]
    pub notes: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Due date of the task. Only the date portion is recorded by the server; the time portion is discarded.
    #[serde(with = "crate::http::nullable_rfc3339", skip_serializing_if = "Nullable::is_unset")]
    pub due: Nullable<OffsetDateTime>,
    /// Completion date of the task. This field is omitted if the task has not been completed.
    #[serde(with = "crate::http::nullable_rfc3339", skip_serializing_if = "Nullable::is_unset")]
    pub completed: Nullable<OffsetDateTime>,
    /// Flag indicating whether the task has been deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Flag indicating whether the task is hidden. This is the case if the task had been marked completed
    /// when the task list was last cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Collection of links. This collection is read-only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<TaskLink>,
    /// Last modification time of the task.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated: Option<OffsetDateTime>,
    /// URL pointing to this task. Used to retrieve, update, or delete this task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// An absolute link to the task in the Google Tasks Web UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_view_link: Option<String>,
    /// Type of the resource. This is always "tasks#task".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Task);

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    NeedsAction,
    Completed,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskLink {
    /// The description. In HTML speak: everything between `<a>` and `</a>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Type of the link, e.g. "email".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Tasks {
    /// Collection of tasks.
    pub items: Vec<Task>,
    /// Token used to access the next page of this result.
    pub next_page_token: Option<String>,
    pub etag: Option<String>,
    /// Type of the resource. This is always "tasks#tasks".
    pub kind: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Tasks);

impl Page for Tasks {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

#[cfg(test)]
mod test {
    use google_cloud_gax::nullable::Nullable;
    use serde_json::json;
    use time::macros::datetime;

    use crate::http::tasks::{Task, TaskStatus};

    #[test]
    fn test_clear_fields_with_null() {
        let patch = Task {
            notes: Nullable::Null,
            due: Nullable::Null,
            status: Some(TaskStatus::NeedsAction),
            ..Default::default()
        };
        assert_eq!(
            json!({"notes": null, "due": null, "status": "needsAction"}),
            serde_json::to_value(&patch).unwrap()
        );
    }

    #[test]
    fn test_timestamps() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "status": "completed",
            "due": "2024-03-01T00:00:00.000Z",
            "completed": "2024-02-28T10:11:12.000Z",
            "updated": "2024-02-28T10:11:12.000Z"
        }))
        .unwrap();
        assert_eq!(Some(TaskStatus::Completed), task.status);
        assert_eq!(Some(&datetime!(2024-03-01 0:00 UTC)), task.due.as_ref());
        assert_eq!(Some(&datetime!(2024-02-28 10:11:12 UTC)), task.completed.as_ref());
        assert!(task.notes.is_unset());

        let patch = Task {
            due: datetime!(2024-04-01 0:00 UTC).into(),
            ..Default::default()
        };
        assert_eq!(json!({"due": "2024-04-01T00:00:00Z"}), serde_json::to_value(&patch).unwrap());
    }
}
