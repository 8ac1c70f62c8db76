use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::user_profiles::UserProfile;

const PATH: &str = "userprofiles/{profileId}";

/// Gets one user profile by ID.
#[derive(Clone, Debug)]
pub struct GetUserProfileCall {
    client: Arc<ApiClient>,
    profile_id: String,
    options: CallOptions,
}

impl GetUserProfileCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::GET,
            PATH,
            &[("profileId", self.profile_id.as_str())],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<UserProfile, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for GetUserProfileCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetUserProfileCall {}
