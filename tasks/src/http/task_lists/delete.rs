use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "tasks/v1/users/@me/lists/{tasklist}";

/// Deletes the authenticated user's specified task list. Tasks in the list are deleted too.
#[derive(Clone, Debug)]
pub struct DeleteTaskListCall {
    client: Arc<ApiClient>,
    tasklist: String,
    options: CallOptions,
}

impl DeleteTaskListCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(Method::DELETE, PATH, &[("tasklist", self.tasklist.as_str())], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteTaskListCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
