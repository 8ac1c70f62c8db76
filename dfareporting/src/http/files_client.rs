use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::files::get::GetFileCall;
use crate::http::files::list::ListFilesCall;

#[derive(Clone, Debug)]
pub struct FilesClient {
    inner: Arc<ApiClient>,
}

impl FilesClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn get(&self, report_id: i64, file_id: i64) -> GetFileCall {
        GetFileCall::new(self.inner.clone(), report_id, file_id)
    }

    pub fn list(&self, profile_id: i64) -> ListFilesCall {
        ListFilesCall::new(self.inner.clone(), profile_id)
    }
}
