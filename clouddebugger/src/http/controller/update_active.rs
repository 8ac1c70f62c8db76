use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::breakpoints::Breakpoint;

const PATH: &str = "v2/controller/debuggees/{debuggeeId}/breakpoints/{id}";

/// Request to update an active breakpoint.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateActiveBreakpointRequest {
    /// Updated breakpoint information. The field `id` must be set. The agent must echo all Breakpoint
    /// specification fields in the update.
    pub breakpoint: Breakpoint,
}

/// Updates the breakpoint state or mutable fields. The entire Breakpoint message must be sent back
/// to the controller service.
#[derive(Clone, Debug)]
pub struct UpdateActiveBreakpointCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    id: String,
    request: UpdateActiveBreakpointRequest,
    options: CallOptions,
}

impl UpdateActiveBreakpointCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str, id: &str, request: UpdateActiveBreakpointRequest) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            id: id.to_string(),
            request,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::PUT,
            PATH,
            &[("debuggeeId", self.debuggee_id.as_str()), ("id", self.id.as_str())],
            &self.options,
        )?;
        Ok(builder.json(&self.request))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UpdateActiveBreakpointCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
