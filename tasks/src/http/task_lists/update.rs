use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::task_lists::TaskList;

const PATH: &str = "tasks/v1/users/@me/lists/{tasklist}";

/// Updates the authenticated user's specified task list.
#[derive(Clone, Debug)]
pub struct UpdateTaskListCall {
    client: Arc<ApiClient>,
    tasklist: String,
    task_list: TaskList,
    options: CallOptions,
}

impl UpdateTaskListCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str, task_list: TaskList) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            task_list,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::PUT, PATH, &[("tasklist", self.tasklist.as_str())], &self.options)?;
        Ok(builder.json(&self.task_list))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<TaskList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UpdateTaskListCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
