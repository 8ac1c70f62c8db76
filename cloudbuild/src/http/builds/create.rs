use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::longrunning::Operation;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::builds::Build;

const PATH: &str = "v1/projects/{projectId}/builds";

/// Starts a build with the specified configuration.
///
/// The returned operation can be used to track the build; its metadata decodes into
/// [`crate::http::builds::BuildOperationMetadata`].
#[derive(Clone, Debug)]
pub struct CreateBuildCall {
    client: Arc<ApiClient>,
    project_id: String,
    body: Build,
    params: CreateBuildParams,
    options: CallOptions,
}

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildParams {
    /// The parent resource where this build will be created. Format: `projects/{project}/locations/{location}`
    pub parent: Option<String>,
}

impl CreateBuildCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, body: Build) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            body,
            params: CreateBuildParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.params.parent = Some(parent.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::POST, PATH, &[("projectId", self.project_id.as_str())], &self.options)?;
        Ok(builder.query(&self.params).json(&self.body))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Operation, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CreateBuildCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
