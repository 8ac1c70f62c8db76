use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::tasks::Task;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks/{task}/move";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskParams {
    /// New parent task identifier. If the task is moved to the top level, this parameter is omitted.
    pub parent: Option<String>,
    /// New previous sibling task identifier. If the task is moved to the first position among its siblings,
    /// this parameter is omitted.
    pub previous: Option<String>,
    /// Destination task list identifier. If set, the task is moved from `tasklist` to this list.
    pub destination_tasklist: Option<String>,
}

/// Moves the specified task to another position in the task list. This can include putting it as a child
/// task under a new parent and/or move it to a different position among its sibling tasks.
#[derive(Clone, Debug)]
pub struct MoveTaskCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task_id: String,
    params: MoveTaskParams,
    options: CallOptions,
}

impl MoveTaskCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str, task_id: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            task_id: task_id.to_string(),
            params: MoveTaskParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.params.parent = Some(parent.into());
        self
    }

    pub fn previous(mut self, previous: impl Into<String>) -> Self {
        self.params.previous = Some(previous.into());
        self
    }

    pub fn destination_tasklist(mut self, destination_tasklist: impl Into<String>) -> Self {
        self.params.destination_tasklist = Some(destination_tasklist.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[("tasklist", self.tasklist.as_str()), ("task", self.task_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Task, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for MoveTaskCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
