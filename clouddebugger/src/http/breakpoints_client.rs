use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::breakpoints::delete::DeleteBreakpointCall;
use crate::http::breakpoints::get::GetBreakpointCall;
use crate::http::breakpoints::list::ListBreakpointsCall;
use crate::http::breakpoints::set::SetBreakpointCall;
use crate::http::breakpoints::Breakpoint;

#[derive(Clone, Debug)]
pub struct BreakpointsClient {
    inner: Arc<ApiClient>,
}

impl BreakpointsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn get(&self, debuggee_id: &str, breakpoint_id: &str) -> GetBreakpointCall {
        GetBreakpointCall::new(self.inner.clone(), debuggee_id, breakpoint_id)
    }

    pub fn list(&self, debuggee_id: &str) -> ListBreakpointsCall {
        ListBreakpointsCall::new(self.inner.clone(), debuggee_id)
    }

    pub fn set(&self, debuggee_id: &str, breakpoint: Breakpoint) -> SetBreakpointCall {
        SetBreakpointCall::new(self.inner.clone(), debuggee_id, breakpoint)
    }

    pub fn delete(&self, debuggee_id: &str, breakpoint_id: &str) -> DeleteBreakpointCall {
        DeleteBreakpointCall::new(self.inner.clone(), debuggee_id, breakpoint_id)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::call::Call;

    use crate::client::test::create_client;
    use crate::http::breakpoints::set::CanaryOption;
    use crate::http::breakpoints::{Action, Breakpoint, BreakpointState, LogLevel, SourceLocation};

    #[tokio::test]
    async fn test_set_and_get() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/debugger/debuggees/d-1/breakpoints/set"),
                request::query(url_decoded(contains(("canaryOption", "CANARY_OPTION_TRY_ENABLE")))),
                request::body(json_decoded(eq(json!({
                    "action": "LOG",
                    "location": {"path": "src/lib.rs", "line": 10},
                    "logMessageFormat": "x = $0",
                    "expressions": ["x"],
                    "logLevel": "WARNING"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "breakpoint": {"id": "bp-1", "action": "LOG", "state": "STATE_CANARY_PENDING_AGENTS",
                               "createTime": "2023-05-06T07:08:09Z"}
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/debugger/debuggees/d-1/breakpoints/bp-1"))
                .respond_with(json_encoded(json!({
                    "breakpoint": {
                        "id": "bp-1",
                        "isFinalState": true,
                        "stackFrames": [{
                            "function": "lib::run",
                            "location": {"path": "src/lib.rs", "line": 10},
                            "locals": [{"name": "x", "value": "1", "type": "i32"}, {"name": "y", "varTableIndex": 0}]
                        }],
                        "variableTable": [{"value": "shared", "members": [{"name": "len", "value": "6"}]}]
                    }
                }))),
        );
        let client = create_client(&server);
        let breakpoint = Breakpoint {
            action: Some(Action::Log),
            location: Some(SourceLocation {
                path: Some("src/lib.rs".to_string()),
                line: Some(10),
                ..Default::default()
            }),
            log_message_format: Some("x = $0".to_string()),
            expressions: vec!["x".to_string()],
            log_level: Some(LogLevel::Warning),
            ..Default::default()
        };
        let response = client
            .breakpoints()
            .set("d-1", breakpoint)
            .canary_option(CanaryOption::CanaryOptionTryEnable)
            .send()
            .await
            .unwrap();
        let created = response.breakpoint.unwrap();
        assert_eq!(Some("bp-1".to_string()), created.id);
        assert_eq!(Some(BreakpointState::StateCanaryPendingAgents), created.state);
        assert!(created.create_time.is_some());

        let response = client.breakpoints().get("d-1", "bp-1").send().await.unwrap();
        let fetched = response.breakpoint.unwrap();
        assert_eq!(Some(true), fetched.is_final_state);
        let frame = &fetched.stack_frames[0];
        assert_eq!(Some("i32".to_string()), frame.locals[0].r#type);
        let resolved = fetched.resolve(&frame.locals[1]);
        assert_eq!(Some("shared"), resolved.value.as_deref());
        assert_eq!(1, resolved.members.len());
    }

    #[tokio::test]
    async fn test_list_with_wait_token() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/debugger/debuggees/d-1/breakpoints"),
                request::query(url_decoded(contains(("action.value", "CAPTURE")))),
                request::query(url_decoded(contains(("includeAllUsers", "true")))),
                request::query(url_decoded(contains(("waitToken", "w1")))),
            ])
            .respond_with(json_encoded(json!({
                "breakpoints": [{"id": "bp-1"}, {"id": "bp-2"}],
                "nextWaitToken": "w2"
            }))),
        );
        let client = create_client(&server);
        let response = client
            .breakpoints()
            .list("d-1")
            .action(Action::Capture)
            .include_all_users(true)
            .wait_token("w1")
            .send()
            .await
            .unwrap();
        assert_eq!(2, response.breakpoints.len());
        assert_eq!(Some("w2".to_string()), response.next_wait_token);
    }

    #[tokio::test]
    async fn test_list_with_newer_enum_values() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/debugger/debuggees/d-1/breakpoints")).respond_with(
                json_encoded(json!({
                    "breakpoints": [
                        {"id": "bp-1", "action": "TRACE", "logLevel": "DEBUG", "state": "STATE_PAUSED"},
                        {"id": "bp-2", "action": "LOG", "logLevel": "INFO", "state": "STATE_IS_FINAL"}
                    ]
                })),
            ),
        );
        let client = create_client(&server);
        let response = client.breakpoints().list("d-1").send().await.unwrap();
        let unknown = &response.breakpoints[0];
        assert_eq!(Some(Action::Unknown), unknown.action);
        assert_eq!(Some(LogLevel::Unknown), unknown.log_level);
        assert_eq!(Some(BreakpointState::Unknown), unknown.state);
        let known = &response.breakpoints[1];
        assert_eq!(Some(Action::Log), known.action);
        assert_eq!(Some(LogLevel::Info), known.log_level);
        assert_eq!(Some(BreakpointState::StateIsFinal), known.state);
    }

    #[tokio::test]
    async fn test_delete() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v2/debugger/debuggees/d-1/breakpoints/bp%201"),
                request::query(url_decoded(contains(("quotaUser", "u1")))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let client = create_client(&server);
        client
            .breakpoints()
            .delete("d-1", "bp 1")
            .quota_user("u1")
            .send()
            .await
            .unwrap();
    }
}
