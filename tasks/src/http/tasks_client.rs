use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::tasks::clear::ClearTasksCall;
use crate::http::tasks::delete::DeleteTaskCall;
use crate::http::tasks::get::GetTaskCall;
use crate::http::tasks::insert::InsertTaskCall;
use crate::http::tasks::list::ListTasksCall;
use crate::http::tasks::move_task::MoveTaskCall;
use crate::http::tasks::patch::PatchTaskCall;
use crate::http::tasks::update::UpdateTaskCall;
use crate::http::tasks::Task;

#[derive(Clone, Debug)]
pub struct TasksClient {
    inner: Arc<ApiClient>,
}

impl TasksClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn clear(&self, tasklist: &str) -> ClearTasksCall {
        ClearTasksCall::new(self.inner.clone(), tasklist)
    }

    pub fn delete(&self, tasklist: &str, task_id: &str) -> DeleteTaskCall {
        DeleteTaskCall::new(self.inner.clone(), tasklist, task_id)
    }

    pub fn get(&self, tasklist: &str, task_id: &str) -> GetTaskCall {
        GetTaskCall::new(self.inner.clone(), tasklist, task_id)
    }

    pub fn insert(&self, tasklist: &str, task: Task) -> InsertTaskCall {
        InsertTaskCall::new(self.inner.clone(), tasklist, task)
    }

    pub fn list(&self, tasklist: &str) -> ListTasksCall {
        ListTasksCall::new(self.inner.clone(), tasklist)
    }

    pub fn move_task(&self, tasklist: &str, task_id: &str) -> MoveTaskCall {
        MoveTaskCall::new(self.inner.clone(), tasklist, task_id)
    }

    pub fn patch(&self, tasklist: &str, task_id: &str, task: Task) -> PatchTaskCall {
        PatchTaskCall::new(self.inner.clone(), tasklist, task_id, task)
    }

    pub fn update(&self, tasklist: &str, task_id: &str, task: Task) -> UpdateTaskCall {
        UpdateTaskCall::new(self.inner.clone(), tasklist, task_id, task)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;
    use time::macros::datetime;

    use google_cloud_gax::error::Error;
    use google_cloud_gax::nullable::Nullable;
    use google_cloud_gax::paging::Paginated;

    use crate::client::test::create_client;
    use crate::http::tasks::{Task, TaskStatus};

    #[tokio::test]
    async fn test_insert_with_parent_and_get() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/tasks/v1/lists/L1/tasks"),
                request::query(url_decoded(contains(("parent", "P")))),
                request::query(url_decoded(contains(("previous", "S")))),
                request::body(json_decoded(eq(json!({
                    "title": "Milk", "notes": "2 liters", "due": "2024-03-01T00:00:00Z"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "kind": "tasks#task", "id": "T1", "title": "Milk", "parent": "P", "position": "00000000000000000001",
                "status": "needsAction", "due": "2024-03-01T00:00:00.000Z",
                "links": [{"type": "email", "description": "mail", "link": "https://mail.google.com/x"}]
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/tasks/v1/lists/L1/tasks/T1"))
                .respond_with(json_encoded(json!({"id": "T1", "status": "completed", "completed": "2024-03-02T08:00:00.000Z"}))),
        );
        let client = create_client(&server);
        let task = Task {
            title: Some("Milk".to_string()),
            notes: "2 liters".to_string().into(),
            due: datetime!(2024-03-01 0:00 UTC).into(),
            ..Default::default()
        };
        let created = client
            .tasks()
            .insert("L1", task)
            .parent("P")
            .previous("S")
            .send()
            .await
            .unwrap();
        assert_eq!(Some("P".to_string()), created.parent);
        assert_eq!(Some(TaskStatus::NeedsAction), created.status);
        assert_eq!(Some("email".to_string()), created.links[0].r#type);

        let got = client.tasks().get("L1", "T1").send().await.unwrap();
        assert_eq!(Some(TaskStatus::Completed), got.status);
        assert_eq!(Some(&datetime!(2024-03-02 8:00 UTC)), got.completed.as_ref());
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/tasks/v1/lists/L1/tasks"),
                request::query(url_decoded(contains(("showCompleted", "false")))),
                request::query(url_decoded(contains(("showHidden", "true")))),
                request::query(url_decoded(contains(("dueMin", "2024-01-01T00:00:00Z")))),
                request::query(url_decoded(contains(("maxResults", "2")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "a"}, {"id": "b"}], "nextPageToken": "p"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/tasks/v1/lists/L1/tasks"),
                request::query(url_decoded(contains(("pageToken", "p")))),
                request::query(url_decoded(contains(("showCompleted", "false")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "c"}]}))),
        );
        let client = create_client(&server);
        let mut call = client
            .tasks()
            .list("L1")
            .show_completed(false)
            .show_hidden(true)
            .due_min(datetime!(2024-01-01 0:00 UTC))
            .max_results(2);
        let mut ids = vec![];
        call.pages(|page| {
            ids.extend(page.items.into_iter().filter_map(|t| t.id));
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec!["a", "b", "c"], ids);
    }

    #[tokio::test]
    async fn test_patch_clears_notes_with_null() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/tasks/v1/lists/L1/tasks/T1"),
                request::body(json_decoded(eq(json!({"notes": null, "due": null})))),
            ])
            .respond_with(json_encoded(json!({"id": "T1", "title": "Milk"}))),
        );
        let client = create_client(&server);
        let patch = Task {
            notes: Nullable::Null,
            due: Nullable::Null,
            ..Default::default()
        };
        let patched = client.tasks().patch("L1", "T1", patch).send().await.unwrap();
        assert!(patched.notes.is_unset());
        assert!(patched.due.is_unset());
    }

    #[tokio::test]
    async fn test_update_move_clear_delete() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/tasks/v1/lists/L1/tasks/T1"),
                request::body(json_decoded(eq(json!({"id": "T1", "title": "Milk", "status": "completed"})))),
            ])
            .respond_with(json_encoded(json!({"id": "T1", "status": "completed", "hidden": false}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/tasks/v1/lists/L1/tasks/T1/move"),
                request::query(url_decoded(contains(("parent", "P2")))),
                request::query(url_decoded(not(contains(key("previous"))))),
            ])
            .respond_with(json_encoded(json!({"id": "T1", "parent": "P2", "position": "00000000000000000000"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("POST", "/tasks/v1/lists/L1/clear")).respond_with(status_code(204)),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/tasks/v1/lists/L1/tasks/T1"))
                .respond_with(status_code(204)),
        );
        let client = create_client(&server);
        let task = Task {
            id: Some("T1".to_string()),
            title: Some("Milk".to_string()),
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        let updated = client.tasks().update("L1", "T1", task).send().await.unwrap();
        assert_eq!(Some(false), updated.hidden);
        let moved = client.tasks().move_task("L1", "T1").parent("P2").send().await.unwrap();
        assert_eq!(Some("P2".to_string()), moved.parent);
        client.tasks().clear("L1").send().await.unwrap();
        client.tasks().delete("L1", "T1").send().await.unwrap();
    }

    #[test]
    fn test_task_with_newer_status() {
        let task: Task = serde_json::from_value(json!({"id": "t1", "status": "archived"})).unwrap();
        assert_eq!(Some(TaskStatus::Unknown), task.status);
        let task: Task = serde_json::from_value(json!({"id": "t2", "status": "completed"})).unwrap();
        assert_eq!(Some(TaskStatus::Completed), task.status);
    }

    #[tokio::test]
    async fn test_missing_task_list() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/tasks/v1/lists/nope/tasks/T1")).respond_with(
                status_code(404).body(
                    json!({"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}})
                        .to_string(),
                ),
            ),
        );
        let client = create_client(&server);
        match client.tasks().get("nope", "T1").send().await.unwrap_err() {
            Error::Response(e) => {
                assert_eq!(404, e.code);
                assert_eq!(Some("NOT_FOUND".to_string()), e.status);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
