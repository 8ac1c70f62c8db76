use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::builds::RepoSource;
use crate::http::triggers::create::CreateBuildTriggerCall;
use crate::http::triggers::delete::DeleteBuildTriggerCall;
use crate::http::triggers::get::GetBuildTriggerCall;
use crate::http::triggers::list::ListBuildTriggersCall;
use crate::http::triggers::patch::PatchBuildTriggerCall;
use crate::http::triggers::run::RunBuildTriggerCall;
use crate::http::triggers::BuildTrigger;

#[derive(Clone, Debug)]
pub struct TriggersClient {
    inner: Arc<ApiClient>,
}

impl TriggersClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn create(&self, project_id: &str, trigger: BuildTrigger) -> CreateBuildTriggerCall {
        CreateBuildTriggerCall::new(self.inner.clone(), project_id, trigger)
    }

    pub fn get(&self, project_id: &str, trigger_id: &str) -> GetBuildTriggerCall {
        GetBuildTriggerCall::new(self.inner.clone(), project_id, trigger_id)
    }

    pub fn list(&self, project_id: &str) -> ListBuildTriggersCall {
        ListBuildTriggersCall::new(self.inner.clone(), project_id)
    }

    pub fn patch(&self, project_id: &str, trigger_id: &str, trigger: BuildTrigger) -> PatchBuildTriggerCall {
        PatchBuildTriggerCall::new(self.inner.clone(), project_id, trigger_id, trigger)
    }

    pub fn delete(&self, project_id: &str, trigger_id: &str) -> DeleteBuildTriggerCall {
        DeleteBuildTriggerCall::new(self.inner.clone(), project_id, trigger_id)
    }

    pub fn run(&self, project_id: &str, trigger_id: &str, source: RepoSource) -> RunBuildTriggerCall {
        RunBuildTriggerCall::new(self.inner.clone(), project_id, trigger_id, source)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::error::Error;
    use google_cloud_gax::paging::Paginated;

    use crate::client::test::create_client;
    use crate::http::builds::RepoSource;
    use crate::http::triggers::{BuildTrigger, CommentControl, GitHubEventsConfig, PullRequestFilter};

    #[tokio::test]
    async fn test_create_and_get() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/triggers"),
                request::body(json_decoded(eq(json!({
                    "name": "pr-check",
                    "github": {
                        "installationId": 12345678901234i64,
                        "owner": "acme",
                        "name": "app",
                        "pullRequest": {"branch": "^main$", "commentControl": "COMMENTS_ENABLED"}
                    },
                    "filename": "cloudbuild.yaml",
                    "substitutions": {"_ENV": "dev"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "t-1",
                "name": "pr-check",
                "github": {"installationId": "12345678901234", "owner": "acme", "name": "app"},
                "createTime": "2023-04-05T06:07:08.123Z"
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p/triggers/t-1"))
                .respond_with(json_encoded(json!({"id": "t-1", "disabled": true}))),
        );
        let client = create_client(&server);
        let trigger = BuildTrigger {
            name: Some("pr-check".to_string()),
            github: Some(GitHubEventsConfig {
                installation_id: Some(12345678901234),
                owner: Some("acme".to_string()),
                name: Some("app".to_string()),
                pull_request: Some(PullRequestFilter {
                    branch: Some("^main$".to_string()),
                    comment_control: Some(CommentControl::CommentsEnabled),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            filename: Some("cloudbuild.yaml".to_string()),
            substitutions: HashMap::from([("_ENV".to_string(), "dev".to_string())]),
            ..Default::default()
        };
        let created = client.triggers().create("p", trigger).send().await.unwrap();
        assert_eq!(Some("t-1".to_string()), created.id);
        assert_eq!(Some(12345678901234), created.github.unwrap().installation_id);
        assert!(created.create_time.is_some());

        let fetched = client.triggers().get("p", "t-1").send().await.unwrap();
        assert_eq!(Some(true), fetched.disabled);
    }

    #[tokio::test]
    async fn test_list_all() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p/triggers"),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"triggers": [{"id": "a"}, {"id": "b"}], "nextPageToken": "n"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/projects/p/triggers"),
                request::query(url_decoded(contains(("pageToken", "n")))),
            ])
            .respond_with(json_encoded(json!({"triggers": [{"id": "c"}], "nextPageToken": ""}))),
        );
        let client = create_client(&server);
        let mut call = client.triggers().list("p");
        let mut ids = vec![];
        call.pages(|page| {
            ids.extend(page.triggers.into_iter().filter_map(|t| t.id));
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec!["a", "b", "c"], ids);
    }

    #[tokio::test]
    async fn test_patch_delete_run() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/v1/projects/p/triggers/t-1"),
                request::body(json_decoded(eq(json!({"disabled": false})))),
            ])
            .respond_with(json_encoded(json!({"id": "t-1", "disabled": false}))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/projects/p/triggers/t-1"))
                .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/triggers/t-1:run"),
                request::body(json_decoded(eq(json!({"branchName": "main"})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/build/p/xyz"}))),
        );
        let client = create_client(&server);
        let patch = BuildTrigger {
            disabled: Some(false),
            ..Default::default()
        };
        let patched = client.triggers().patch("p", "t-1", patch).send().await.unwrap();
        assert_eq!(Some(false), patched.disabled);

        let deleted = client.triggers().delete("p", "t-1").send().await.unwrap();
        assert_eq!(200, deleted.server_response.status_code);

        let source = RepoSource {
            branch_name: Some("main".to_string()),
            ..Default::default()
        };
        let operation = client.triggers().run("p", "t-1", source).send().await.unwrap();
        assert_eq!("operations/build/p/xyz", operation.name);
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/projects/p/triggers/missing")).respond_with(
                status_code(404).body(
                    json!({"error": {
                        "code": 404,
                        "message": "trigger not found",
                        "status": "NOT_FOUND",
                        "errors": [{"domain": "global", "reason": "notFound", "message": "trigger not found"}]
                    }})
                    .to_string(),
                ),
            ),
        );
        let client = create_client(&server);
        let err = client.triggers().get("p", "missing").send().await.unwrap_err();
        assert_eq!(Some(404), err.http_status_code());
        match err {
            Error::Response(e) => {
                assert_eq!(Some("NOT_FOUND".to_string()), e.status);
                assert_eq!("notFound", e.errors[0].reason);
                assert!(!e.is_retriable());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
