use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::operations::cancel::CancelOperationCall;
use crate::http::operations::get::GetOperationCall;

#[derive(Clone, Debug)]
pub struct OperationsClient {
    inner: Arc<ApiClient>,
}

impl OperationsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// `name` is the full operation name such as `operations/build/my-project/abc`.
    pub fn get(&self, name: &str) -> GetOperationCall {
        GetOperationCall::new(self.inner.clone(), name)
    }

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

    use crate::client::test::create_client;
    use crate::http::builds::{Build, BuildOperationMetadata, BuildStatus};

    #[tokio::test]
    async fn test_get_done() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/build/p/abc")).respond_with(
                json_encoded(json!({
                    "name": "operations/build/p/abc",
                    "done": true,
                    "metadata": {
                        "@type": "type.googleapis.com/google.devtools.cloudbuild.v1.BuildOperationMetadata",
                        "build": {"id": "abc", "status": "SUCCESS"}
                    },
                    "response": {
                        "@type": "type.googleapis.com/google.devtools.cloudbuild.v1.Build",
                        "id": "abc",
                        "status": "SUCCESS",
                        "images": ["gcr.io/p/app"]
                    }
                })),
            ),
        );
        let client = create_client(&server);
        let operation = client.operations().get("operations/build/p/abc").send().await.unwrap();
        assert!(operation.done);
        assert!(operation.error.is_none());
        let metadata: BuildOperationMetadata = operation.metadata_as().unwrap().unwrap();
        assert_eq!(Some(BuildStatus::Success), metadata.build.status);
        let build: Build = operation.response_as().unwrap().unwrap();
        assert_eq!(vec!["gcr.io/p/app".to_string()], build.images);
    }

    #[tokio::test]
    async fn test_get_failed() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/operations/build/p/bad")).respond_with(
                json_encoded(json!({
                    "name": "operations/build/p/bad",
                    "done": true,
                    "error": {"code": 2, "message": "step exited with non-zero status"}
                })),
            ),
        );
        let client = create_client(&server);
        let operation = client.operations().get("operations/build/p/bad").send().await.unwrap();
        let status = operation.error.unwrap();
        assert_eq!(2, status.code);
        assert_eq!("step exited with non-zero status", status.message);
    }

    #[tokio::test]
    async fn test_cancel() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/operations/build/p/abc:cancel"),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let client = create_client(&server);
        client.operations().cancel("operations/build/p/abc").send().await.unwrap();
    }
}
