use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::tasks::Task;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks/{task}";

/// Returns the specified task.
#[derive(Clone, Debug)]
pub struct GetTaskCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task_id: String,
    options: CallOptions,
}

impl GetTaskCall {
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
            Method::GET,
            PATH,
            &[("tasklist", self.tasklist.as_str()), ("task", self.task_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Task, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetTaskCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetTaskCall {}
