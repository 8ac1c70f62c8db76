use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::builds::Build;

const PATH: &str = "v1/projects/{projectId}/builds/{id}";

/// Returns information about a previously requested build.
#[derive(Clone, Debug)]
pub struct GetBuildCall {
    client: Arc<ApiClient>,
    project_id: String,
    id: String,
    params: GetBuildParams,
    options: CallOptions,
}

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetBuildParams {
    /// The name of the `Build` to retrieve. Format: `projects/{project}/locations/{location}/builds/{build}`
    pub name: Option<String>,
}

impl GetBuildCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            id: id.to_string(),
            params: GetBuildParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = Some(name.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::GET,
            PATH,
            &[("projectId", self.project_id.as_str()), ("id", self.id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Build, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetBuildCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetBuildCall {}
