use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::breakpoints::Breakpoint;
use crate::http::controller::list_active::ListActiveBreakpointsCall;
use crate::http::controller::register::{RegisterDebuggeeCall, RegisterDebuggeeRequest};
use crate::http::controller::update_active::{UpdateActiveBreakpointCall, UpdateActiveBreakpointRequest};
use crate::http::debuggees::Debuggee;

#[derive(Clone, Debug)]
pub struct ControllerClient {
    inner: Arc<ApiClient>,
}

impl ControllerClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn register(&self, debuggee: Debuggee) -> RegisterDebuggeeCall {
        RegisterDebuggeeCall::new(self.inner.clone(), RegisterDebuggeeRequest { debuggee })
    }

    pub fn list_active_breakpoints(&self, debuggee_id: &str) -> ListActiveBreakpointsCall {
        ListActiveBreakpointsCall::new(self.inner.clone(), debuggee_id)
    }

    /// `id` must match `breakpoint.id`.
    pub fn update_active_breakpoint(
        &self,
        debuggee_id: &str,
        id: &str,
        breakpoint: Breakpoint,
    ) -> UpdateActiveBreakpointCall {
        UpdateActiveBreakpointCall::new(
            self.inner.clone(),
            debuggee_id,
            id,
            UpdateActiveBreakpointRequest { breakpoint },
        )
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use crate::client::test::create_client;
    use crate::http::breakpoints::{Breakpoint, FormatMessage, StatusMessage};
    use crate::http::debuggees::Debuggee;

    #[tokio::test]
    async fn test_register() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/controller/debuggees/register"),
                request::body(json_decoded(eq(json!({
                    "debuggee": {
                        "project": "123",
                        "uniquifier": "u",
                        "description": "svc",
                        "agentVersion": "google.com/rust/v0.1"
                    }
                })))),
            ])
            .respond_with(json_encoded(json!({
                "debuggee": {"id": "d-9", "project": "123", "isDisabled": false},
                "agentId": "agent-1"
            }))),
        );
        let client = create_client(&server);
        let debuggee = Debuggee {
            project: Some("123".to_string()),
            uniquifier: Some("u".to_string()),
            description: Some("svc".to_string()),
            agent_version: Some("google.com/rust/v0.1".to_string()),
            ..Default::default()
        };
        let response = client.controller().register(debuggee).send().await.unwrap();
        assert_eq!(Some("agent-1".to_string()), response.agent_id);
        assert_eq!(Some("d-9".to_string()), response.debuggee.unwrap().id);
    }

    #[tokio::test]
    async fn test_list_active_wait_expired() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/controller/debuggees/d-9/breakpoints"),
                request::query(url_decoded(contains(("agentId", "agent-1")))),
                request::query(url_decoded(contains(("successOnTimeout", "true")))),
                request::query(url_decoded(contains(("waitToken", "w1")))),
            ])
            .respond_with(json_encoded(json!({"nextWaitToken": "w1", "waitExpired": true}))),
        );
        let client = create_client(&server);
        let response = client
            .controller()
            .list_active_breakpoints("d-9")
            .agent_id("agent-1")
            .wait_token("w1")
            .send()
            .await
            .unwrap();
        assert!(response.wait_expired);
        assert!(response.breakpoints.is_empty());
        assert_eq!(Some("w1".to_string()), response.next_wait_token);
    }

    #[tokio::test]
    async fn test_update_active() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v2/controller/debuggees/d-9/breakpoints/bp-1"),
                request::body(json_decoded(eq(json!({
                    "breakpoint": {
                        "id": "bp-1",
                        "isFinalState": true,
                        "status": {"isError": true, "description": {"format": "Invalid line $0", "parameters": ["99"]}}
                    }
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let client = create_client(&server);
        let breakpoint = Breakpoint {
            id: Some("bp-1".to_string()),
            is_final_state: Some(true),
            status: Some(StatusMessage {
                is_error: Some(true),
                description: Some(FormatMessage {
                    format: Some("Invalid line $0".to_string()),
                    parameters: vec!["99".to_string()],
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        client
            .controller()
            .update_active_breakpoint("d-9", "bp-1", breakpoint)
            .send()
            .await
            .unwrap();
    }
}
