use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::datasets::Dataset;

const PATH: &str = "v1/datasets/{datasetId}";

/// Gets a dataset by ID.
#[derive(Clone, Debug)]
pub struct GetDatasetCall {
    client: Arc<ApiClient>,
    dataset_id: String,
    options: CallOptions,
}

impl GetDatasetCall {
    pub(crate) fn new(client: Arc<ApiClient>, dataset_id: &str) -> Self {
        Self {
            client,
            dataset_id: dataset_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::GET,
            PATH,
            &[("datasetId", self.dataset_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Dataset, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetDatasetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetDatasetCall {}
