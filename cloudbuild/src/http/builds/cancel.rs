use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::builds::Build;

const PATH: &str = "v1/projects/{projectId}/builds/{id}:cancel";

/// Request to cancel an ongoing build.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelBuildRequest {
    /// The name of the `Build` to cancel. Format: `projects/{project}/locations/{location}/builds/{build}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required. ID of the project.
    pub project_id: String,
    /// Required. ID of the build.
    pub id: String,
}

/// Cancels a build in progress.
#[derive(Clone, Debug)]
pub struct CancelBuildCall {
    client: Arc<ApiClient>,
    project_id: String,
    id: String,
    request: CancelBuildRequest,
    options: CallOptions,
}

impl CancelBuildCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, id: &str, request: CancelBuildRequest) -> Self {
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
    pub async fn send(&self) -> Result<Build, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CancelBuildCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
