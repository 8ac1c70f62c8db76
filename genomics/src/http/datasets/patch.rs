use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::datasets::Dataset;

const PATH: &str = "v1/datasets/{datasetId}";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchDatasetParams {
    /// An optional mask specifying which fields to update. At this time, the only mutable field is `name`.
    /// If unspecified, all mutable fields will be updated.
    pub update_mask: Option<String>,
}

/// Updates a dataset. This method supports patch semantics.
#[derive(Clone, Debug)]
pub struct PatchDatasetCall {
    client: Arc<ApiClient>,
    dataset_id: String,
    dataset: Dataset,
    params: PatchDatasetParams,
    options: CallOptions,
}

impl PatchDatasetCall {
    pub(crate) fn new(client: Arc<ApiClient>, dataset_id: &str, dataset: Dataset) -> Self {
        Self {
            client,
            dataset_id: dataset_id.to_string(),
            dataset,
            params: PatchDatasetParams::default(),
            options: CallOptions::default(),
        }
    }

    /// Comma separated field paths such as `name`.
    pub fn update_mask(mut self, update_mask: impl Into<String>) -> Self {
        self.params.update_mask = Some(update_mask.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::PATCH,
            PATH,
            &[("datasetId", self.dataset_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params).json(&self.dataset))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Dataset, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for PatchDatasetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
