use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::breakpoints::{Action, Breakpoint};

const PATH: &str = "v2/debugger/debuggees/{debuggeeId}/breakpoints";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListBreakpointsParams {
    /// Only breakpoints with the specified action will pass the filter.
    #[serde(rename = "action.value")]
    pub action: Option<Action>,
    /// The client version making the call.
    pub client_version: Option<String>,
    /// When set to `true`, the response includes the list of breakpoints set by any user.
    /// Otherwise, it includes only breakpoints set by the caller.
    pub include_all_users: Option<bool>,
    /// When set to `true`, the response includes active and inactive breakpoints.
    /// Otherwise, it includes only active breakpoints.
    pub include_inactive: Option<bool>,
    /// This field is deprecated. The following fields are always stripped out of the result:
    /// `stack_frames`, `evaluated_expressions` and `variable_table`.
    pub strip_results: Option<bool>,
    /// A wait token that, if specified, blocks the call until the breakpoints list has changed,
    /// or a server selected timeout has expired.
    pub wait_token: Option<String>,
}

/// Response for listing breakpoints.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBreakpointsResponse {
    /// List of breakpoints matching the request.
    /// The fields `id` and `location` are guaranteed to be set on each breakpoint.
    pub breakpoints: Vec<Breakpoint>,
    /// A wait token that can be used in the next call to `list` (REST) or `ListBreakpoints` (RPC)
    /// to block until the list of breakpoints has changes.
    pub next_wait_token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListBreakpointsResponse);

/// Lists all breakpoints for the debuggee.
///
/// This is a hanging GET: with a `wait_token` the server holds the request until the list changes
/// or its timeout expires, in which case it answers with an error status.
#[derive(Clone, Debug)]
pub struct ListBreakpointsCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    params: ListBreakpointsParams,
    options: CallOptions,
}

impl ListBreakpointsCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            params: ListBreakpointsParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn action(mut self, action: Action) -> Self {
        self.params.action = Some(action);
        self
    }

    pub fn client_version(mut self, client_version: impl Into<String>) -> Self {
        self.params.client_version = Some(client_version.into());
        self
    }

    pub fn include_all_users(mut self, include_all_users: bool) -> Self {
        self.params.include_all_users = Some(include_all_users);
        self
    }

    pub fn include_inactive(mut self, include_inactive: bool) -> Self {
        self.params.include_inactive = Some(include_inactive);
        self
    }

    pub fn strip_results(mut self, strip_results: bool) -> Self {
        self.params.strip_results = Some(strip_results);
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
    pub async fn send(&self) -> Result<ListBreakpointsResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListBreakpointsCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListBreakpointsCall {}
