use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::web_resource::delete::DeleteWebResourceCall;
use crate::http::web_resource::get::GetWebResourceCall;
use crate::http::web_resource::get_token::GetTokenCall;
use crate::http::web_resource::insert::InsertWebResourceCall;
use crate::http::web_resource::list::ListWebResourcesCall;
use crate::http::web_resource::patch::PatchWebResourceCall;
use crate::http::web_resource::update::UpdateWebResourceCall;
use crate::http::web_resource::{GetTokenRequest, Site, VerificationMethod, WebResource};

#[derive(Clone, Debug)]
pub struct WebResourceClient {
    inner: Arc<ApiClient>,
}

impl WebResourceClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// `id` is the identifier returned in `WebResource::id`; it is percent-encoded into the path.
    pub fn delete(&self, id: &str) -> DeleteWebResourceCall {
        DeleteWebResourceCall::new(self.inner.clone(), id)
    }

    pub fn get(&self, id: &str) -> GetWebResourceCall {
        GetWebResourceCall::new(self.inner.clone(), id)
    }

    pub fn get_token(&self, site: Site, verification_method: VerificationMethod) -> GetTokenCall {
        let request = GetTokenRequest {
            site: Some(site),
            verification_method: Some(verification_method),
        };
        GetTokenCall::new(self.inner.clone(), request)
    }

    pub fn insert(&self, verification_method: VerificationMethod, resource: WebResource) -> InsertWebResourceCall {
        InsertWebResourceCall::new(self.inner.clone(), verification_method, resource)
    }

    pub fn list(&self) -> ListWebResourcesCall {
        ListWebResourcesCall::new(self.inner.clone())
    }

    pub fn patch(&self, id: &str, resource: WebResource) -> PatchWebResourceCall {
        PatchWebResourceCall::new(self.inner.clone(), id, resource)
    }

    pub fn update(&self, id: &str, resource: WebResource) -> UpdateWebResourceCall {
        UpdateWebResourceCall::new(self.inner.clone(), id, resource)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::call::{Call, ConditionalCall};
    use google_cloud_gax::error::Error;

    use crate::client::test::create_client;
    use crate::http::web_resource::{Site, SiteType, VerificationMethod, WebResource};

    #[tokio::test]
    async fn test_get_token_and_insert() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/siteVerification/v1/token"),
                request::body(json_decoded(eq(json!({
                    "site": {"identifier": "example.com", "type": "INET_DOMAIN"},
                    "verificationMethod": "DNS_TXT"
                })))),
            ])
            .respond_with(json_encoded(json!({"method": "DNS_TXT", "token": "google-site-verification=abc"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/siteVerification/v1/webResource"),
                request::query(url_decoded(contains(("verificationMethod", "DNS_TXT")))),
                request::body(json_decoded(eq(json!({
                    "site": {"identifier": "example.com", "type": "INET_DOMAIN"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "dns://example.com",
                "owners": ["owner@example.com"],
                "site": {"identifier": "example.com", "type": "INET_DOMAIN"}
            }))),
        );
        let client = create_client(&server);
        let site = Site {
            identifier: Some("example.com".to_string()),
            r#type: Some(SiteType::InetDomain),
        };
        let token = client
            .web_resource()
            .get_token(site.clone(), VerificationMethod::DnsTxt)
            .send()
            .await
            .unwrap();
        assert_eq!(Some(VerificationMethod::DnsTxt), token.method);
        assert_eq!(Some("google-site-verification=abc".to_string()), token.token);

        let resource = WebResource {
            site: Some(site),
            ..Default::default()
        };
        let verified = client
            .web_resource()
            .insert(VerificationMethod::DnsTxt, resource)
            .send()
            .await
            .unwrap();
        assert_eq!(Some("dns://example.com".to_string()), verified.id);
        assert_eq!(vec!["owner@example.com"], verified.owners);
    }

    #[tokio::test]
    async fn test_get_list_with_escaped_id() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/siteVerification/v1/webResource/dns%3A%2F%2Fexample.com"),
                request::query(url_decoded(contains(("quotaUser", "u1")))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("etag", "\"w1\"")
                    .body(json!({"id": "dns://example.com", "owners": ["a@example.com"]}).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/siteVerification/v1/webResource"))
                .respond_with(json_encoded(json!({"items": [{"id": "dns://example.com"}, {"id": "http://example.org/"}]}))),
        );
        let client = create_client(&server);
        let resource = client
            .web_resource()
            .get("dns://example.com")
            .quota_user("u1")
            .send()
            .await
            .unwrap();
        assert_eq!(Some("\"w1\""), resource.server_response.etag());
        let list = client.web_resource().list().send().await.unwrap();
        assert_eq!(2, list.items.len());
        assert_eq!(Some("http://example.org/".to_string()), list.items[1].id);
    }

    #[tokio::test]
    async fn test_patch_update_delete() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/siteVerification/v1/webResource/id1"),
                request::body(json_decoded(eq(json!({"owners": ["a@example.com", "b@example.com"]})))),
            ])
            .respond_with(json_encoded(json!({"id": "id1", "owners": ["a@example.com", "b@example.com"]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/siteVerification/v1/webResource/id1"),
                request::body(json_decoded(eq(json!({"id": "id1", "owners": ["a@example.com"]})))),
            ])
            .respond_with(json_encoded(json!({"id": "id1", "owners": ["a@example.com"]}))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/siteVerification/v1/webResource/id1"))
                .respond_with(status_code(204)),
        );
        let client = create_client(&server);
        let patch = WebResource {
            owners: vec!["a@example.com".to_string(), "b@example.com".to_string()],
            ..Default::default()
        };
        let patched = client.web_resource().patch("id1", patch).send().await.unwrap();
        assert_eq!(2, patched.owners.len());
        let full = WebResource {
            id: Some("id1".to_string()),
            owners: vec!["a@example.com".to_string()],
            ..Default::default()
        };
        let updated = client.web_resource().update("id1", full).send().await.unwrap();
        assert_eq!(1, updated.owners.len());
        client.web_resource().delete("id1").send().await.unwrap();
    }

    #[tokio::test]
    async fn test_not_modified_and_forbidden() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/siteVerification/v1/webResource/id1"),
                request::headers(contains(("if-none-match", "\"w1\""))),
            ])
            .respond_with(status_code(304)),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/siteVerification/v1/webResource/id2")).respond_with(
                status_code(403).body(
                    json!({"error": {
                        "code": 403,
                        "message": "You are not an owner of this site.",
                        "errors": [{"domain": "global", "reason": "forbidden", "message": "You are not an owner of this site."}]
                    }})
                    .to_string(),
                ),
            ),
        );
        let client = create_client(&server);
        let err = client
            .web_resource()
            .get("id1")
            .if_none_match("\"w1\"")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_modified());
        match client.web_resource().get("id2").send().await.unwrap_err() {
            Error::Response(e) => {
                assert_eq!(403, e.code);
                assert_eq!("forbidden", e.errors[0].reason);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
