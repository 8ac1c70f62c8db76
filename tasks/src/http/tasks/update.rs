use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::tasks::Task;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks/{task}";

/// Updates the specified task.
#[derive(Clone, Debug)]
pub struct UpdateTaskCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task_id: String,
    task: Task,
    options: CallOptions,
}

impl UpdateTaskCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str, task_id: &str, task: Task) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            task_id: task_id.to_string(),
            task,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::PUT,
            PATH,
            &[("tasklist", self.tasklist.as_str()), ("task", self.task_id.as_str())],
            &self.options,
        )?;
        Ok(builder.json(&self.task))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Task, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UpdateTaskCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
