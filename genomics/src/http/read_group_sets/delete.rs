use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v1/readgroupsets/{readGroupSetId}";

/// Deletes a read group set.
#[derive(Clone, Debug)]
pub struct DeleteReadGroupSetCall {
    client: Arc<ApiClient>,
    read_group_set_id: String,
    options: CallOptions,
}

impl DeleteReadGroupSetCall {
    pub(crate) fn new(client: Arc<ApiClient>, read_group_set_id: &str) -> Self {
        Self {
            client,
            read_group_set_id: read_group_set_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[("readGroupSetId", self.read_group_set_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteReadGroupSetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
