use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::web_resource::{VerificationMethod, WebResource};

const PATH: &str = "webResource";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertWebResourceParams {
    /// The method to use for verifying a site or domain.
    pub verification_method: VerificationMethod,
}

/// Attempts verification of a website or domain.
#[derive(Clone, Debug)]
pub struct InsertWebResourceCall {
    client: Arc<ApiClient>,
    resource: WebResource,
    params: InsertWebResourceParams,
    options: CallOptions,
}

impl InsertWebResourceCall {
    pub(crate) fn new(client: Arc<ApiClient>, verification_method: VerificationMethod, resource: WebResource) -> Self {
        Self {
            client,
            resource,
            params: InsertWebResourceParams { verification_method },
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.query(&self.params).json(&self.resource))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<WebResource, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for InsertWebResourceCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
