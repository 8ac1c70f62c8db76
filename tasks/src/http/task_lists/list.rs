use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::paging::Paginated;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::task_lists::TaskLists;

const PATH: &str = "tasks/v1/users/@me/lists";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskListsParams {
    /// Maximum number of task lists returned on one page. Optional. The default is 1000 (max allowed: 1000).
    pub max_results: Option<i32>,
    /// Token specifying the result page to return. Optional.
    pub page_token: Option<String>,
}

/// Returns all the authenticated user's task lists.
#[derive(Clone, Debug)]
pub struct ListTaskListsCall {
    client: Arc<ApiClient>,
    params: ListTaskListsParams,
    options: CallOptions,
}

impl ListTaskListsCall {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            params: ListTaskListsParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn max_results(mut self, max_results: i32) -> Self {
        self.params.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.params.page_token = Some(page_token.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::GET, PATH, &[], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<TaskLists, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListTaskListsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListTaskListsCall {}

#[async_trait]
impl Paginated for ListTaskListsCall {
    type Page = TaskLists;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<TaskLists, Error> {
        self.send().await
    }
}
