use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::read_group_sets::ReadGroupSet;

const PATH: &str = "v1/readgroupsets/{readGroupSetId}";

/// Gets a read group set by ID.
#[derive(Clone, Debug)]
pub struct GetReadGroupSetCall {
    client: Arc<ApiClient>,
    read_group_set_id: String,
    options: CallOptions,
}

impl GetReadGroupSetCall {
    pub(crate) fn new(client: Arc<ApiClient>, read_group_set_id: &str) -> Self {
        Self {
            client,
            read_group_set_id: read_group_set_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::GET,
            PATH,
            &[("readGroupSetId", self.read_group_set_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ReadGroupSet, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetReadGroupSetCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetReadGroupSetCall {}
