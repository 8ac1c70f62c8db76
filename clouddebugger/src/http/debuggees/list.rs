use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::debuggees::Debuggee;

const PATH: &str = "v2/debugger/debuggees";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListDebuggeesParams {
    /// Project number of a Google Cloud project whose debuggees to list.
    pub project: Option<String>,
    /// When set to `true`, the result includes all debuggees. Otherwise, the result includes only debuggees that are active.
    pub include_inactive: Option<bool>,
    /// The client version making the call. Schema: `domain/type/version` (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,
}

/// Response for listing debuggees.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDebuggeesResponse {
    /// List of debuggees accessible to the calling user.
    /// The fields `debuggee.id` and `description` are guaranteed to be set.
    pub debuggees: Vec<Debuggee>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListDebuggeesResponse);

/// Lists all the debuggees that the user has access to.
#[derive(Clone, Debug)]
pub struct ListDebuggeesCall {
    client: Arc<ApiClient>,
    params: ListDebuggeesParams,
    options: CallOptions,
}

impl ListDebuggeesCall {
    pub(crate) fn new(client: Arc<ApiClient>, project: &str) -> Self {
        Self {
            client,
            params: ListDebuggeesParams {
                project: Some(project.to_string()),
                ..Default::default()
            },
            options: CallOptions::default(),
        }
    }

    pub fn include_inactive(mut self, include_inactive: bool) -> Self {
        self.params.include_inactive = Some(include_inactive);
        self
    }

    pub fn client_version(mut self, client_version: impl Into<String>) -> Self {
        self.params.client_version = Some(client_version.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(Method::GET, PATH, &[], &self.options)?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListDebuggeesResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListDebuggeesCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListDebuggeesCall {}
