use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::task_lists::TaskList;

const PATH: &str = "tasks/v1/users/@me/lists";

/// Creates a new task list and adds it to the authenticated user's task lists.
#[derive(Clone, Debug)]
pub struct InsertTaskListCall {
    client: Arc<ApiClient>,
    task_list: TaskList,
    options: CallOptions,
}

impl InsertTaskListCall {
    pub(crate) fn new(client: Arc<ApiClient>, task_list: TaskList) -> Self {
        Self {
            client,
            task_list,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.json(&self.task_list))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<TaskList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for InsertTaskListCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
