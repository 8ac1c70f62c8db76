use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::operations::cancel::CancelOperationCall;
use crate::http::operations::get::GetOperationCall;
use crate::http::operations::list::ListOperationsCall;

#[derive(Clone, Debug)]
pub struct OperationsClient {
    inner: Arc<ApiClient>,
}

impl OperationsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// Clients may use this method to poll the operation result at intervals.
    pub fn get(&self, name: &str) -> GetOperationCall {
        GetOperationCall::new(self.inner.clone(), name)
    }

    /// `name` is the operation collection, which is `operations`.
    pub fn list(&self, name: &str) -> ListOperationsCall {
        ListOperationsCall::new(self.inner.clone(), name)
    }

    /// Clients can use `get` or `list` to check whether the cancellation succeeded.
    pub fn cancel(&self, name: &str) -> CancelOperationCall {
        CancelOperationCall::new(self.inner.clone(), name)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::error::Error;
    use google_cloud_gax::paging::Paginated;

    use crate::client::test::create_client;
    use crate::http::operations::OperationMetadata;

    #[tokio::test]
    async fn test_get_metadata() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/ENoWqqbhKxi9"))
                .respond_with(json_encoded(json!({
                    "name": "operations/ENoWqqbhKxi9",
                    "metadata": {
                        "@type": "type.googleapis.com/google.genomics.v1.OperationMetadata",
                        "projectId": "p",
                        "createTime": "2017-04-01T10:00:00Z",
                        "request": {"@type": "type.googleapis.com/google.genomics.v1.ImportVariantsRequest"},
                        "events": [{"description": "started", "startTime": "2017-04-01T10:00:01Z"}],
                        "labels": {"team": "bio"}
                    }
                }))),
        );
        let client = create_client(&server);
        let operation = client.operations().get("operations/ENoWqqbhKxi9").send().await.unwrap();
        assert!(!operation.done);
        let metadata: OperationMetadata = operation.metadata_as().unwrap().unwrap();
        assert_eq!(Some("p".to_string()), metadata.project_id);
        assert_eq!(Some("started".to_string()), metadata.events[0].description);
        assert_eq!("bio", metadata.labels["team"]);
        assert!(metadata.request.contains_key("@type"));
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations"),
                request::query(url_decoded(contains(("filter", "projectId = p AND status = RUNNING")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"operations": [{"name": "operations/a"}], "nextPageToken": "x"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/operations"),
                request::query(url_decoded(contains(("pageToken", "x")))),
            ])
            .respond_with(json_encoded(json!({"operations": [{"name": "operations/b", "done": true}]}))),
        );
        let client = create_client(&server);
        let mut call = client
            .operations()
            .list("operations")
            .filter("projectId = p AND status = RUNNING");
        let mut names = vec![];
        call.pages(|page| {
            names.extend(page.operations.into_iter().map(|o| o.name));
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec!["operations/a", "operations/b"], names);
    }

    #[tokio::test]
    async fn test_cancel() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/operations/a:cancel"),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let client = create_client(&server);
        client.operations().cancel("operations/a").send().await.unwrap();
    }
}
