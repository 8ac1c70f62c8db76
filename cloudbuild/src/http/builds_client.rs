use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::builds::cancel::{CancelBuildCall, CancelBuildRequest};
use crate::http::builds::create::CreateBuildCall;
use crate::http::builds::get::GetBuildCall;
use crate::http::builds::list::ListBuildsCall;
use crate::http::builds::retry::{RetryBuildCall, RetryBuildRequest};
use crate::http::builds::Build;

#[derive(Clone, Debug)]
pub struct BuildsClient {
    inner: Arc<ApiClient>,
}

impl BuildsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn create(&self, project_id: &str, build: Build) -> CreateBuildCall {
        CreateBuildCall::new(self.inner.clone(), project_id, build)
    }

    pub fn get(&self, project_id: &str, id: &str) -> GetBuildCall {
        GetBuildCall::new(self.inner.clone(), project_id, id)
    }

    pub fn list(&self, project_id: &str) -> ListBuildsCall {
        ListBuildsCall::new(self.inner.clone(), project_id)
    }

    pub fn cancel(&self, project_id: &str, id: &str) -> CancelBuildCall {
        let request = CancelBuildRequest {
            project_id: project_id.to_string(),
            id: id.to_string(),
            ..Default::default()
        };
        CancelBuildCall::new(self.inner.clone(), project_id, id, request)
    }

    pub fn retry(&self, project_id: &str, id: &str) -> RetryBuildCall {
        let request = RetryBuildRequest {
            project_id: project_id.to_string(),
            id: id.to_string(),
            ..Default::default()
        };
        RetryBuildCall::new(self.inner.clone(), project_id, id, request)
    }
}
