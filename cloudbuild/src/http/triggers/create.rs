use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::triggers::BuildTrigger;

const PATH: &str = "v1/projects/{projectId}/triggers";

/// Creates a new `BuildTrigger`.
#[derive(Clone, Debug)]
pub struct CreateBuildTriggerCall {
    client: Arc<ApiClient>,
    project_id: String,
    body: BuildTrigger,
    options: CallOptions,
}

impl CreateBuildTriggerCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, body: BuildTrigger) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            body,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::POST, PATH, &[("projectId", self.project_id.as_str())], &self.options)?;
        Ok(builder.json(&self.body))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<BuildTrigger, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CreateBuildTriggerCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
