use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use google_cloud_gax::longrunning::CancelOperationRequest;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/{+name}:cancel";

/// Starts asynchronous cancellation on a long-running operation.
#[derive(Clone, Debug)]
pub struct CancelOperationCall {
    client: Arc<ApiClient>,
    name: String,
    options: CallOptions,
}

impl CancelOperationCall {
    pub(crate) fn new(client: Arc<ApiClient>, name: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self
            .client
            .request(Method::POST, PATH, &[("name", self.name.as_str())], &self.options)?;
        Ok(builder.json(&CancelOperationRequest::default()))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for CancelOperationCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
