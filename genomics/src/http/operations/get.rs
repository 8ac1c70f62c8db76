use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::longrunning::Operation;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/{+name}";

/// Gets the latest state of a long-running operation.
#[derive(Clone, Debug)]
pub struct GetOperationCall {
    client: Arc<ApiClient>,
    name: String,
    options: CallOptions,
}

impl GetOperationCall {
    pub(crate) fn new(client: Arc<ApiClient>, name: &str) -> Self {
        Self {
            client,
            name: name.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client
            .request(Method::GET, PATH, &[("name", self.name.as_str())], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Operation, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetOperationCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetOperationCall {}
