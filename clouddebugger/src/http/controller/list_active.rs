use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::breakpoints::Breakpoint;

const PATH: &str = "v2/controller/debuggees/{debuggeeId}/breakpoints";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListActiveBreakpointsParams {
    /// Identifies the agent. This is the ID returned in the RegisterDebuggee response.
    pub agent_id: Option<String>,
    /// If set to `true`, returns `google.rpc.Code.OK` status and sets the `wait_expired` response field
    /// to `true` when the server-selected timeout has expired.
    /// If set to `false`, returns `google.rpc.Code.ABORTED` status when the server-selected timeout has expired.
    pub success_on_timeout: Option<bool>,
    /// A token that, if specified, blocks the method call until the list of active breakpoints has changed,
    /// or a server-selected timeout has expired.
    pub wait_token: Option<String>,
}

/// Response for listing active breakpoints.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListActiveBreakpointsResponse {
    /// List of all active breakpoints. The fields `id` and `location` are guaranteed to be set on each breakpoint.
    pub breakpoints: Vec<Breakpoint>,
    /// A token that can be used in the next method call to block until the list of breakpoints changes.
    pub next_wait_token: Option<String>,
    /// If set to `true`, indicates that there is no change to the list of active breakpoints and the
    /// server-selected timeout has expired. The `breakpoints` field would be empty and should be ignored.
    pub wait_expired: bool,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListActiveBreakpointsResponse);

/// Returns the list of all active breakpoints for the debuggee.
///
/// The call blocks while a `wait_token` is given and nothing changed. `success_on_timeout` defaults
/// to `true` here so an expired wait is reported through `wait_expired` instead of an error.
#[derive(Clone, Debug)]
pub struct ListActiveBreakpointsCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    params: ListActiveBreakpointsParams,
    options: CallOptions,
}

impl ListActiveBreakpointsCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            params: ListActiveBreakpointsParams {
                success_on_timeout: Some(true),
                ..Default::default()
            },
            options: CallOptions::default(),
        }
    }

    pub fn agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.params.agent_id = Some(agent_id.into());
        self
    }

    pub fn success_on_timeout(mut self, success_on_timeout: bool) -> Self {
        self.params.success_on_timeout = Some(success_on_timeout);
        self
    }

    pub fn wait_token(mut self, wait_token: impl Into<String>) -> Self {
        self.params.wait_token = Some(wait_token.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::GET,
            PATH,
            &[("debuggeeId", self.debuggee_id.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<ListActiveBreakpointsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListActiveBreakpointsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
