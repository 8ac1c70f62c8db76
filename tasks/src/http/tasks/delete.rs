use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks/{task}";

/// Deletes the specified task from the task list.
#[derive(Clone, Debug)]
pub struct DeleteTaskCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task_id: String,
    options: CallOptions,
}

impl DeleteTaskCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str, task_id: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            task_id: task_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[("tasklist", self.tasklist.as_str()), ("task", self.task_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteTaskCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
