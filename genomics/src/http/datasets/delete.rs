use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/datasets/{datasetId}";

/// Deletes a dataset and all of its contents (all read group sets, reference sets, variant sets,
/// call sets, annotation sets, etc.). This is reversible (up to one week after the deletion) via `undelete`.
#[derive(Clone, Debug)]
pub struct DeleteDatasetCall {
    client: Arc<ApiClient>,
    dataset_id: String,
    options: CallOptions,
}

impl DeleteDatasetCall {
    pub(crate) fn new(client: Arc<ApiClient>, dataset_id: &str) -> Self {
        Self {
            client,
            dataset_id: dataset_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[("datasetId", self.dataset_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteDatasetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
