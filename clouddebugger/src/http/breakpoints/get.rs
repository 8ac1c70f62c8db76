use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::breakpoints::Breakpoint;

const PATH: &str = "v2/debugger/debuggees/{debuggeeId}/breakpoints/{breakpointId}";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetBreakpointParams {
    /// The client version making the call. Schema: `domain/type/version` (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,
}

/// Response for getting breakpoint information.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBreakpointResponse {
    /// Complete breakpoint state. The fields `id` and `location` are guaranteed to be set.
    pub breakpoint: Option<Breakpoint>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(GetBreakpointResponse);

/// Gets breakpoint information.
#[derive(Clone, Debug)]
pub struct GetBreakpointCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    breakpoint_id: String,
    params: GetBreakpointParams,
    options: CallOptions,
}

impl GetBreakpointCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str, breakpoint_id: &str) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            breakpoint_id: breakpoint_id.to_string(),
            params: GetBreakpointParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn client_version(mut self, client_version: impl Into<String>) -> Self {
        self.params.client_version = Some(client_version.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::GET,
            PATH,
            &[
                ("debuggeeId", self.debuggee_id.as_str()),
                ("breakpointId", self.breakpoint_id.as_str()),
            ],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<GetBreakpointResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetBreakpointCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetBreakpointCall {}
