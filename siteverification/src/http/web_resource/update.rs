use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::web_resource::WebResource;

const PATH: &str = "webResource/{id}";

/// Modifies the list of owners for a website or domain.
#[derive(Clone, Debug)]
pub struct UpdateWebResourceCall {
    client: Arc<ApiClient>,
    id: String,
    resource: WebResource,
    options: CallOptions,
}

impl UpdateWebResourceCall {
    pub(crate) fn new(client: Arc<ApiClient>, id: &str, resource: WebResource) -> Self {
        Self {
            client,
            id: id.to_string(),
            resource,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::PUT, PATH, &[("id", self.id.as_str())], &self.options)?;
        Ok(builder.json(&self.resource))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<WebResource, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UpdateWebResourceCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
