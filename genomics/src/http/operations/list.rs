use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::longrunning::ListOperationsResponse;
use google_cloud_gax::paging::Paginated;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/{+name}";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListOperationsParams {
    /// A string for filtering Operations. Supports `projectId`, `createTime`, `status` and `labels.key`,
    /// for example `projectId = my-project AND createTime >= 1432140000 AND status = RUNNING`.
    pub filter: Option<String>,
    /// The maximum number of results to return. The maximum value is 256.
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

/// Lists operations that match the specified filter in the request.
#[derive(Clone, Debug)]
pub struct ListOperationsCall {
    client: Arc<ApiClient>,
    name: String,
    params: ListOperationsParams,
    options: CallOptions,
}

impl ListOperationsCall {
    pub(crate) fn new(client: Arc<ApiClient>, name: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            params: ListOperationsParams::default(),
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

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::GET, PATH, &[("name", self.name.as_str())], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListOperationsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListOperationsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListOperationsCall {}

#[async_trait]
impl Paginated for ListOperationsCall {
    type Page = ListOperationsResponse;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<ListOperationsResponse, Error> {
        self.send().await
    }
}
