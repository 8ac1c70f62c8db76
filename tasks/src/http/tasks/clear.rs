use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "tasks/v1/lists/{tasklist}/clear";

/// Clears all completed tasks from the specified task list. The affected tasks will be marked as 'hidden' and no longer be returned by default when retrieving all tasks for a task list.
#[derive(Clone, Debug)]
pub struct ClearTasksCall {
    client: Arc<ApiClient>,
    tasklist: String,
    options: CallOptions,
}

impl ClearTasksCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::POST,
            PATH,
            &[("tasklist", self.tasklist.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ClearTasksCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
