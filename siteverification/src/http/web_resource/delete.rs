use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "webResource/{id}";

/// Relinquishes ownership of a website or domain.
#[derive(Clone, Debug)]
pub struct DeleteWebResourceCall {
    client: Arc<ApiClient>,
    id: String,
    options: CallOptions,
}

impl DeleteWebResourceCall {
    pub(crate) fn new(client: Arc<ApiClient>, id: &str) -> Self {
        Self {
            client,
            id: id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client
            .request(Method::DELETE, PATH, &[("id", self.id.as_str())], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteWebResourceCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
