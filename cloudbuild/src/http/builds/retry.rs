use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::longrunning::Operation;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/projects/{projectId}/builds/{id}:retry";

/// Specifies a build to retry.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryBuildRequest {
    /// The name of the `Build` to retry. Format: `projects/{project}/locations/{location}/builds/{build}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required. ID of the project.
    pub project_id: String,
    /// Required. Build ID of the original build.
    pub id: String,
}

/// Creates a new build based on the specified build.
///
/// This method creates a new build using the original build request, which may or may not result in an
/// identical build.
#[derive(Clone, Debug)]
pub struct RetryBuildCall {
    client: Arc<ApiClient>,
    project_id: String,
    id: String,
    request: RetryBuildRequest,
    options: CallOptions,
}

impl RetryBuildCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, id: &str, request: RetryBuildRequest) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            id: id.to_string(),
            request,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[("projectId", self.project_id.as_str()), ("id", self.id.as_str())],
            &self.options,
        )?;
        Ok(builder.json(&self.request))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Operation, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for RetryBuildCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
