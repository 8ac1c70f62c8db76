use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::variants::Variant;

const PATH: &str = "v1/variants/{variantId}";

/// Gets a variant by ID.
#[derive(Clone, Debug)]
pub struct GetVariantCall {
    client: Arc<ApiClient>,
    variant_id: String,
    options: CallOptions,
}

impl GetVariantCall {
    pub(crate) fn new(client: Arc<ApiClient>, variant_id: &str) -> Self {
        Self {
            client,
            variant_id: variant_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::GET,
            PATH,
            &[("variantId", self.variant_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Variant, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetVariantCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetVariantCall {}
