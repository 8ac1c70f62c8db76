use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::tasks::Task;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertTaskParams {
    /// Parent task identifier. If the task is created at the top level, this parameter is omitted.
    pub parent: Option<String>,
    /// Previous sibling task identifier. If the task is created at the first position among its siblings,
    /// this parameter is omitted.
    pub previous: Option<String>,
}

/// Creates a new task on the specified task list.
#[derive(Clone, Debug)]
pub struct InsertTaskCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task: Task,
    params: InsertTaskParams,
    options: CallOptions,
}

impl InsertTaskCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str, task: Task) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            task,
            params: InsertTaskParams::default(),
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

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[("tasklist", self.tasklist.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params).json(&self.task))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Task, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for InsertTaskCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
