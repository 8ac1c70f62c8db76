use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::breakpoints::Breakpoint;

const PATH: &str = "v2/debugger/debuggees/{debuggeeId}/breakpoints/set";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetBreakpointParams {
    /// The client version making the call.
    pub client_version: Option<String>,
    /// The canary option set by the user upon setting breakpoint.
    pub canary_option: Option<CanaryOption>,
}

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanaryOption {
    #[default]
    CanaryOptionUnspecified,
    /// Enable canary for this breakpoint.
    CanaryOptionTryEnable,
    /// Disable canary for this breakpoint.
    CanaryOptionTryDisable,
}

/// Response for setting a breakpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SetBreakpointResponse {
    /// Breakpoint resource. The field `id` is guaranteed to be set (in addition to the echoed fields).
    pub breakpoint: Option<Breakpoint>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(SetBreakpointResponse);

/// Sets the breakpoint to the debuggee.
#[derive(Clone, Debug)]
pub struct SetBreakpointCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    breakpoint: Breakpoint,
    params: SetBreakpointParams,
    options: CallOptions,
}

impl SetBreakpointCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str, breakpoint: Breakpoint) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            breakpoint,
            params: SetBreakpointParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn client_version(mut self, client_version: impl Into<String>) -> Self {
        self.params.client_version = Some(client_version.into());
        self
    }

    pub fn canary_option(mut self, canary_option: CanaryOption) -> Self {
        self.params.canary_option = Some(canary_option);
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[("debuggeeId", self.debuggee_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params).json(&self.breakpoint))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<SetBreakpointResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for SetBreakpointCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
