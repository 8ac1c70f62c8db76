use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/variants/{variantId}";

/// Deletes a variant.
#[derive(Clone, Debug)]
pub struct DeleteVariantCall {
    client: Arc<ApiClient>,
    variant_id: String,
    options: CallOptions,
}

impl DeleteVariantCall {
    pub(crate) fn new(client: Arc<ApiClient>, variant_id: &str) -> Self {
        Self {
            client,
            variant_id: variant_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[("variantId", self.variant_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteVariantCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
