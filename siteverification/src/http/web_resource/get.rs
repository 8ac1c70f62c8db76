use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::web_resource::WebResource;

const PATH: &str = "webResource/{id}";

/// Gets the most current data for a website or domain.
#[derive(Clone, Debug)]
pub struct GetWebResourceCall {
    client: Arc<ApiClient>,
    id: String,
    options: CallOptions,
}

impl GetWebResourceCall {
    pub(crate) fn new(client: Arc<ApiClient>, id: &str) -> Self {
        Self {
            client,
            id: id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client
            .request(Method::GET, PATH, &[("id", self.id.as_str())], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<WebResource, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetWebResourceCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetWebResourceCall {}
