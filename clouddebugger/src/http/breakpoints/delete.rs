use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "v2/debugger/debuggees/{debuggeeId}/breakpoints/{breakpointId}";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBreakpointParams {
    /// The client version making the call.
    pub client_version: Option<String>,
}

/// Deletes the breakpoint from the debuggee.
#[derive(Clone, Debug)]
pub struct DeleteBreakpointCall {
    client: Arc<ApiClient>,
    debuggee_id: String,
    breakpoint_id: String,
    params: DeleteBreakpointParams,
    options: CallOptions,
}

impl DeleteBreakpointCall {
    pub(crate) fn new(client: Arc<ApiClient>, debuggee_id: &str, breakpoint_id: &str) -> Self {
        Self {
            client,
            debuggee_id: debuggee_id.to_string(),
            breakpoint_id: breakpoint_id.to_string(),
            params: DeleteBreakpointParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn client_version(mut self, client_version: impl Into<String>) -> Self {
        self.params.client_version = Some(client_version.into());
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::DELETE,
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
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteBreakpointCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
