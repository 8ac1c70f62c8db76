use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::longrunning::Operation;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::builds::RepoSource;

const PATH: &str = "v1/projects/{projectId}/triggers/{triggerId}:run";

/// Runs a `BuildTrigger` at a particular source revision.
#[derive(Clone, Debug)]
pub struct RunBuildTriggerCall {
    client: Arc<ApiClient>,
    project_id: String,
    trigger_id: String,
    body: RepoSource,
    options: CallOptions,
}

impl RunBuildTriggerCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, trigger_id: &str, body: RepoSource) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            trigger_id: trigger_id.to_string(),
            body,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[
                ("projectId", self.project_id.as_str()),
                ("triggerId", self.trigger_id.as_str()),
            ],
            &self.options,
        )?;
        Ok(builder.json(&self.body))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Operation, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for RunBuildTriggerCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
