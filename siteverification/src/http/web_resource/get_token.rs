use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::web_resource::{GetTokenRequest, GetTokenResponse};

const PATH: &str = "token";

/// Gets a verification token for placing on a website or domain.
#[derive(Clone, Debug)]
pub struct GetTokenCall {
    client: Arc<ApiClient>,
    request: GetTokenRequest,
    options: CallOptions,
}

impl GetTokenCall {
    pub(crate) fn new(client: Arc<ApiClient>, request: GetTokenRequest) -> Self {
        Self {
            client,
            request,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::POST, PATH, &[], &self.options)?;
        Ok(builder.json(&self.request))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<GetTokenResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetTokenCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
