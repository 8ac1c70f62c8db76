use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::builds::Build;

const PATH: &str = "v1/projects/{projectId}/builds";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListBuildsParams {
    /// The raw filter text to constrain the results.
    pub filter: Option<String>,
    /// Number of results to return in the list.
    pub page_size: Option<i32>,
    /// The page token for the next page of Builds.
    pub page_token: Option<String>,
    /// The parent of the collection of `Builds`. Format: `projects/{project}/locations/{location}`
    pub parent: Option<String>,
}

/// Response including listed builds.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBuildsResponse {
    /// Builds will be sorted by `create_time`, descending.
    pub builds: Vec<Build>,
    /// Token to receive the next page of results. This will be absent if the end of the response list has been reached.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListBuildsResponse);

impl Page for ListBuildsResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Lists previously requested builds.
///
/// Previously requested builds may still be in-progress, or may have finished successfully or unsuccessfully.
#[derive(Clone, Debug)]
pub struct ListBuildsCall {
    client: Arc<ApiClient>,
    project_id: String,
    params: ListBuildsParams,
    options: CallOptions,
}

impl ListBuildsCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            params: ListBuildsParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.params.filter = Some(filter.into());
        self
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.params.page_size = Some(page_size);
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.params.page_token = Some(page_token.into());
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.params.parent = Some(parent.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::GET, PATH, &[("projectId", self.project_id.as_str())], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListBuildsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListBuildsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListBuildsCall {}

#[async_trait]
impl Paginated for ListBuildsCall {
    type Page = ListBuildsResponse;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<ListBuildsResponse, Error> {
        self.send().await
    }
}
