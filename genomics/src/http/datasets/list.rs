use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::datasets::Dataset;

const PATH: &str = "v1/datasets";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListDatasetsParams {
    /// The maximum number of results to return in a single page. If unspecified, defaults to 50. The maximum value is 1024.
    pub page_size: Option<i32>,
    /// The continuation token, which is used to page through large result sets.
    pub page_token: Option<String>,
    /// Required. The Google Cloud project ID to list datasets for.
    pub project_id: Option<String>,
}

/// The dataset list response.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDatasetsResponse {
    /// The list of matching Datasets.
    pub datasets: Vec<Dataset>,
    /// The continuation token, which is used to page through large result sets.
    /// Provide this value in a subsequent request to return the next page of results.
    /// This field will be empty if there aren't any additional results.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListDatasetsResponse);

impl Page for ListDatasetsResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Lists datasets within a project.
#[derive(Clone, Debug)]
pub struct ListDatasetsCall {
    client: Arc<ApiClient>,
    params: ListDatasetsParams,
    options: CallOptions,
}

impl ListDatasetsCall {
    pub(crate) fn new(client: Arc<ApiClient>, project_id: &str) -> Self {
        Self {
            client,
            params: ListDatasetsParams {
                project_id: Some(project_id.to_string()),
                ..Default::default()
            },
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
        let builder = self.client.request(Method::GET, PATH, &[], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListDatasetsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListDatasetsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListDatasetsCall {}

#[async_trait]
impl Paginated for ListDatasetsCall {
    type Page = ListDatasetsResponse;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<ListDatasetsResponse, Error> {
        self.send().await
    }
}
