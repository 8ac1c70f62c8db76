use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::triggers::BuildTrigger;

const PATH: &str = "v1/projects/{projectId}/triggers";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListBuildTriggersParams {
    /// Number of results to return in the list.
    pub page_size: Option<i32>,
    /// Token to provide to skip to a particular spot in the list.
    pub page_token: Option<String>,
}

/// Response containing existing `BuildTriggers`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBuildTriggersResponse {
    /// `BuildTriggers` for the project, sorted by `create_time` descending.
    pub triggers: Vec<BuildTrigger>,
    /// Token to receive the next page of results.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListBuildTriggersResponse);

impl Page for ListBuildTriggersResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Lists existing `BuildTrigger`s.
#[derive(Clone, Debug)]
pub struct ListBuildTriggersCall {
    client: Arc<ApiClient>,
    project_id: String,
    params: ListBuildTriggersParams,
    options: CallOptions,
}

impl ListBuildTriggersCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            params: ListBuildTriggersParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.params.page_size = Some(page_size);
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.params.page_token = Some(page_token.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::GET, PATH, &[("projectId", self.project_id.as_str())], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListBuildTriggersResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListBuildTriggersCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListBuildTriggersCall {}

#[async_trait]
impl Paginated for ListBuildTriggersCall {
    type Page = ListBuildTriggersResponse;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<ListBuildTriggersResponse, Error> {
        self.send().await
    }
}
