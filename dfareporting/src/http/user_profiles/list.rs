use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::user_profiles::UserProfileList;

const PATH: &str = "userprofiles";

/// Retrieves list of user profiles for a user.
#[derive(Clone, Debug)]
pub struct ListUserProfilesCall {
    client: Arc<ApiClient>,
    options: CallOptions,
}

impl ListUserProfilesCall {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(Method::GET, PATH, &[], &self.options)
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<UserProfileList, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListUserProfilesCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListUserProfilesCall {}
