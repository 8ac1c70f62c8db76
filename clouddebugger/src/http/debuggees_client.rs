use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::debuggees::list::ListDebuggeesCall;

#[derive(Clone, Debug)]
pub struct DebuggeesClient {
    inner: Arc<ApiClient>,
}

impl DebuggeesClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// Lists the debuggees of `project`, a project number or id.
    pub fn list(&self, project: &str) -> ListDebuggeesCall {
        ListDebuggeesCall::new(self.inner.clone(), project)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use crate::client::test::create_client;
    use crate::http::breakpoints::Reference;

    #[tokio::test]
    async fn test_list() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/debugger/debuggees"),
                request::query(url_decoded(contains(("project", "123456")))),
                request::query(url_decoded(contains(("includeInactive", "true")))),
                request::query(url_decoded(contains(("clientVersion", "google.com/test/v1")))),
            ])
            .respond_with(json_encoded(json!({
                "debuggees": [{
                    "id": "d-1",
                    "project": "123456",
                    "description": "app v1",
                    "isInactive": true,
                    "sourceContexts": [{"git": {"url": "https://github.com/acme/app", "revisionId": "abc123"}}],
                    "extSourceContexts": [{
                        "context": {"cloudRepo": {"repoId": {"projectRepoId": {"projectId": "p", "repoName": "default"}}, "aliasContext": {"kind": "MOVABLE", "name": "main"}}},
                        "labels": {"category": "local"}
                    }],
                    "status": {"isError": true, "refersTo": "BREAKPOINT_AGE", "description": {"format": "old"}}
                }]
            }))),
        );
        let client = create_client(&server);
        let response = client
            .debuggees()
            .list("123456")
            .include_inactive(true)
            .client_version("google.com/test/v1")
            .send()
            .await
            .unwrap();
        assert_eq!(1, response.debuggees.len());
        let debuggee = &response.debuggees[0];
        assert_eq!(Some("d-1".to_string()), debuggee.id);
        assert_eq!(Some(true), debuggee.is_inactive);
        let git = debuggee.source_contexts[0].git.as_ref().unwrap();
        assert_eq!(Some("abc123".to_string()), git.revision_id);
        let ext = &debuggee.ext_source_contexts[0];
        assert_eq!(Some(&"local".to_string()), ext.labels.get("category"));
        let status = debuggee.status.as_ref().unwrap();
        assert_eq!(Some(Reference::BreakpointAge), status.refers_to);
    }
}
