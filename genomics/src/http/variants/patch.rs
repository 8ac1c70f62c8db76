use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::variants::Variant;

const PATH: &str = "v1/variants/{variantId}";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchVariantParams {
    /// An optional mask specifying which fields to update. At this time, mutable fields are `names` and `info`.
    /// Acceptable values are "names" and "info". If unspecified, all mutable fields will be updated.
    pub update_mask: Option<String>,
}

/// Updates a variant. This method supports patch semantics. Returns the modified variant without its calls.
#[derive(Clone, Debug)]
pub struct PatchVariantCall {
    client: Arc<ApiClient>,
    variant_id: String,
    variant: Variant,
    params: PatchVariantParams,
    options: CallOptions,
}

impl PatchVariantCall {
    pub(crate) fn new(client: Arc<ApiClient>, variant_id: &str, variant: Variant) -> Self {
        Self {
            client,
            variant_id: variant_id.to_string(),
            variant,
            params: PatchVariantParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn update_mask(mut self, update_mask: impl Into<String>) -> Self {
        self.params.update_mask = Some(update_mask.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::PATCH,
            PATH,
            &[("variantId", self.variant_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params).json(&self.variant))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Variant, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for PatchVariantCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
