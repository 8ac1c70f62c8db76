use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::read_group_sets::ReadGroupSet;

const PATH: &str = "v1/readgroupsets/search";

/// The read group set search request.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadGroupSetsRequest {
    /// Restricts this query to read group sets within the given datasets. At least one ID must be provided.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_ids: Vec<String>,
    /// Only return read group sets for which a substring of the name matches this string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// The maximum number of results to return in a single page. If unspecified, defaults to 256. The maximum value is 1024.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

/// The read group set search response.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReadGroupSetsResponse {
    pub read_group_sets: Vec<ReadGroupSet>,
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(SearchReadGroupSetsResponse);

impl Page for SearchReadGroupSetsResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Searches for read group sets matching the criteria.
#[derive(Clone, Debug)]
pub struct SearchReadGroupSetsCall {
    client: Arc<ApiClient>,
    request: SearchReadGroupSetsRequest,
    options: CallOptions,
}

impl SearchReadGroupSetsCall {
    pub(crate) fn new(client: Arc<ApiClient>, request: SearchReadGroupSetsRequest) -> Self {
        Self {
            client,
            request,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.json(&self.request))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<SearchReadGroupSetsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for SearchReadGroupSetsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

#[async_trait]
impl Paginated for SearchReadGroupSetsCall {
    type Page = SearchReadGroupSetsResponse;

    fn current_page_token(&self) -> Option<String> {
        self.request.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.request.page_token = token;
    }

    async fn fetch_page(&self) -> Result<SearchReadGroupSetsResponse, Error> {
        self.send().await
    }
}
