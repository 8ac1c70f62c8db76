use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use google_cloud_gax::paging::{Page, Paginated};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::reports::Report;
use crate::http::{Scope, SortField, SortOrder};

const PATH: &str = "userprofiles/{profileId}/reports";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListReportsParams {
    /// Maximum number of results to return.
    pub max_results: Option<i32>,
    /// The value of the nextToken from the previous result page.
    pub page_token: Option<String>,
    /// The scope that defines which results are returned.
    pub scope: Option<Scope>,
    /// The field by which to sort the list.
    pub sort_field: Option<SortField>,
    /// Order of sorted results.
    pub sort_order: Option<SortOrder>,
}

/// Represents the list of reports.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportList {
    /// The eTag of this response for caching purposes.
    pub etag: Option<String>,
    /// The reports returned in this response.
    pub items: Vec<Report>,
    /// The kind of list this is, in this case dfareporting#reportList.
    pub kind: Option<String>,
    /// Continuation token used to page through reports. To retrieve the next page of results,
    /// set the next request's "pageToken" to the value of this field.
    pub next_page_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ReportList);

impl Page for ReportList {
    fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

/// Retrieves list of reports.
#[derive(Clone, Debug)]
pub struct ListReportsCall {
    client: Arc<ApiClient>,
    profile_id: String,
    params: ListReportsParams,
    options: CallOptions,
}

impl ListReportsCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            params: ListReportsParams::default(),
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

    /// `ALL` or `MINE`.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.params.scope = Some(scope);
        self
    }

    pub fn sort_field(mut self, sort_field: SortField) -> Self {
        self.params.sort_field = Some(sort_field);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.params.sort_order = Some(sort_order);
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::GET,
            PATH,
            &[("profileId", self.profile_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ReportList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListReportsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListReportsCall {}

#[async_trait]
impl Paginated for ListReportsCall {
    type Page = ReportList;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<ReportList, Error> {
        self.send().await
    }
}
