use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, ServerResponse};
use google_cloud_gax::impl_response_meta;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::debuggees::Debuggee;

const PATH: &str = "v2/controller/debuggees/register";

/// Request to register a debuggee.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterDebuggeeRequest {
    /// Debuggee information to register. The fields `project`, `uniquifier`, `description` and
    /// `agent_version` of the debuggee must be set.
    pub debuggee: Debuggee,
}

/// Response for registering a debuggee.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterDebuggeeResponse {
    /// Debuggee resource. The field `id` is guaranteed to be set (in addition to the echoed fields).
    /// If the field `is_disabled` is set to `true`, the agent should disable itself by removing all
    /// breakpoints and detaching from the application.
    pub debuggee: Option<Debuggee>,
    /// A unique ID generated for the agent. Each RegisterDebuggee request will generate a new agent ID.
    pub agent_id: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(RegisterDebuggeeResponse);

/// Registers the debuggee with the controller service.
#[derive(Clone, Debug)]
pub struct RegisterDebuggeeCall {
    client: Arc<ApiClient>,
    request: RegisterDebuggeeRequest,
    options: CallOptions,
}

impl RegisterDebuggeeCall {
    pub(crate) fn new(client: Arc<ApiClient>, request: RegisterDebuggeeRequest) -> Self {
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
    pub async fn send(&self) -> Result<RegisterDebuggeeResponse, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for RegisterDebuggeeCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
