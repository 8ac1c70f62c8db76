use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::task_lists::TaskList;

const PATH: &str = "tasks/v1/users/@me/lists/{tasklist}";

/// Returns the authenticated user's specified task list.
#[derive(Clone, Debug)]
pub struct GetTaskListCall {
    client: Arc<ApiClient>,
    tasklist: String,
    options: CallOptions,
}

impl GetTaskListCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(Method::GET, PATH, &[("tasklist", self.tasklist.as_str())], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<TaskList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetTaskListCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetTaskListCall {}
