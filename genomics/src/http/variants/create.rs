use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::variants::Variant;

const PATH: &str = "v1/variants";

/// Creates a new variant.
#[derive(Clone, Debug)]
pub struct CreateVariantCall {
    client: Arc<ApiClient>,
    variant: Variant,
    options: CallOptions,
}

impl CreateVariantCall {
    pub(crate) fn new(client: Arc<ApiClient>, variant: Variant) -> Self {
        Self {
            client,
            variant,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.json(&self.variant))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Variant, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CreateVariantCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
