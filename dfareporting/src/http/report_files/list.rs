use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::paging::Paginated;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::files::FileList;
use crate::http::{SortField, SortOrder};

const PATH: &str = "userprofiles/{profileId}/reports/{reportId}/files";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListReportFilesParams {
    /// Maximum number of results to return.
    pub max_results: Option<i32>,
    /// The value of the nextToken from the previous result page.
    pub page_token: Option<String>,
    /// The field by which to sort the list.
    pub sort_field: Option<SortField>,
    /// Order of sorted results.
    pub sort_order: Option<SortOrder>,
}

/// Lists files for a report.
#[derive(Clone, Debug)]
pub struct ListReportFilesCall {
    client: Arc<ApiClient>,
    profile_id: String,
    report_id: String,
    params: ListReportFilesParams,
    options: CallOptions,
}

impl ListReportFilesCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64, report_id: i64) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            report_id: report_id.to_string(),
            params: ListReportFilesParams::default(),
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
            &[
                ("profileId", self.profile_id.as_str()),
                ("reportId", self.report_id.as_str()),
            ],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<FileList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListReportFilesCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListReportFilesCall {}

#[async_trait]
impl Paginated for ListReportFilesCall {
    type Page = FileList;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<FileList, Error> {
        self.send().await
    }
}
