use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::datasets::Dataset;

const PATH: &str = "v1/datasets";

/// Creates a new dataset.
#[derive(Clone, Debug)]
pub struct CreateDatasetCall {
    client: Arc<ApiClient>,
    dataset: Dataset,
    options: CallOptions,
}

impl CreateDatasetCall {
    pub(crate) fn new(client: Arc<ApiClient>, dataset: Dataset) -> Self {
        Self {
            client,
            dataset,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.json(&self.dataset))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Dataset, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CreateDatasetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
