use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::user_profiles::get::GetUserProfileCall;
use crate::http::user_profiles::list::ListUserProfilesCall;

#[derive(Clone, Debug)]
pub struct UserProfilesClient {
    inner: Arc<ApiClient>,
}

impl UserProfilesClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn get(&self, profile_id: i64) -> GetUserProfileCall {
        GetUserProfileCall::new(self.inner.clone(), profile_id)
    }

    pub fn list(&self) -> ListUserProfilesCall {
        ListUserProfilesCall::new(self.inner.clone())
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::call::ConditionalCall;

    use crate::client::test::create_client;

    #[tokio::test]
    async fn test_list_and_get() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/dfareporting/v4/userprofiles")).respond_with(
                json_encoded(json!({
                    "kind": "dfareporting#userProfileList",
                    "etag": "\"l1\"",
                    "items": [{"profileId": "1234567", "accountId": "890", "userName": "alice"}]
                })),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1234567"),
                request::headers(contains(("if-none-match", "\"p1\""))),
            ])
            .respond_with(status_code(304)),
        );
        let client = create_client(&server);
        let profiles = client.user_profiles().list().send().await.unwrap();
        assert_eq!(Some("\"l1\"".to_string()), profiles.etag);
        let profile = &profiles.items[0];
        assert_eq!(Some(1234567), profile.profile_id);
        assert_eq!(Some(890), profile.account_id);

        let err = client
            .user_profiles()
            .get(1234567)
            .if_none_match("\"p1\"")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_modified());
    }
}
