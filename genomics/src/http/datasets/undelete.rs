use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::datasets::Dataset;

const PATH: &str = "v1/datasets/{datasetId}:undelete";

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct UndeleteDatasetRequest {}

/// Undeletes a dataset by restoring a dataset which was deleted via this API.
/// This operation is only possible for a week after the deletion occurred.
#[derive(Clone, Debug)]
pub struct UndeleteDatasetCall {
    client: Arc<ApiClient>,
    dataset_id: String,
    request: UndeleteDatasetRequest,
    options: CallOptions,
}

impl UndeleteDatasetCall {
    pub(crate) fn new(client: Arc<ApiClient>, dataset_id: &str) -> Self {
        Self {
            client,
            dataset_id: dataset_id.to_string(),
            request: UndeleteDatasetRequest::default(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[("datasetId", self.dataset_id.as_str())],
            &self.options,
        )?;
        Ok(builder.json(&self.request))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Dataset, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UndeleteDatasetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
