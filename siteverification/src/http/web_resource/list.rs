use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::web_resource::ListWebResourcesResponse;

const PATH: &str = "webResource";

/// Gets the list of your verified websites and domains. The response is not paginated.
#[derive(Clone, Debug)]
pub struct ListWebResourcesCall {
    client: Arc<ApiClient>,
    options: CallOptions,
}

impl ListWebResourcesCall {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(Method::GET, PATH, &[], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListWebResourcesResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListWebResourcesCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListWebResourcesCall {}
