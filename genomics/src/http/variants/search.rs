use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::variants::Variant;

const PATH: &str = "v1/variants/search";

/// The variant search request.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchVariantsRequest {
    /// At most one variant set ID must be provided. Only variants from this variant set will be returned.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variant_set_ids: Vec<String>,
    /// Only return variants which have exactly this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    /// Only return variant calls which belong to call sets with these ids. Leaving this blank returns all
    /// variant calls. If a variant has no calls belonging to any of these call sets, it won't be returned at all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub call_set_ids: Vec<String>,
    /// Required. Only return variants in this reference sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// The beginning of the window (0-based, inclusive) for which overlapping variants should be returned.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<i64>,
    /// The end of the window, 0-based exclusive. If unspecified or 0, defaults to the length of the reference.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<i64>,
    /// The continuation token, which is used to page through large result sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// The maximum number of variants to return in a single page. If unspecified, defaults to 5000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// The maximum number of calls to return in a single page. Note that this limit may be exceeded in
    /// the event that a matching variant contains more calls than the requested maximum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calls: Option<i32>,
}

/// The variant search response.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchVariantsResponse {
    /// The list of matching Variants.
    pub variants: Vec<Variant>,
    /// The continuation token, which is used to page through large result sets.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(SearchVariantsResponse);

impl Page for SearchVariantsResponse {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Gets a list of variants matching the criteria. The page token travels in the request body.
#[derive(Clone, Debug)]
pub struct SearchVariantsCall {
    client: Arc<ApiClient>,
    request: SearchVariantsRequest,
    options: CallOptions,
}

impl SearchVariantsCall {
    pub(crate) fn new(client: Arc<ApiClient>, request: SearchVariantsRequest) -> Self {
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
    pub async fn send(&self) -> Result<SearchVariantsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for SearchVariantsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

#[async_trait]
impl Paginated for SearchVariantsCall {
    type Page = SearchVariantsResponse;

    fn current_page_token(&self) -> Option<String> {
        self.request.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.request.page_token = token;
    }

    async fn fetch_page(&self) -> Result<SearchVariantsResponse, Error> {
        self.send().await
    }
}
