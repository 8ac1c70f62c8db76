use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/projects/{projectId}/triggers/{triggerId}";

/// Deletes a `BuildTrigger` by its project ID and trigger ID.
#[derive(Clone, Debug)]
pub struct DeleteBuildTriggerCall {
    client: Arc<ApiClient>,
    project_id: String,
    trigger_id: String,
    options: CallOptions,
}

impl DeleteBuildTriggerCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str, trigger_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            trigger_id: trigger_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[
                ("projectId", self.project_id.as_str()),
                ("triggerId", self.trigger_id.as_str()),
            ],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteBuildTriggerCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
