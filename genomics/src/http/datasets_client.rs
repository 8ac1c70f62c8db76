use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::datasets::create::CreateDatasetCall;
use crate::http::datasets::delete::DeleteDatasetCall;
use crate::http::datasets::get::GetDatasetCall;
use crate::http::datasets::list::ListDatasetsCall;
use crate::http::datasets::patch::PatchDatasetCall;
use crate::http::datasets::undelete::UndeleteDatasetCall;
use crate::http::datasets::Dataset;

#[derive(Clone, Debug)]
pub struct DatasetsClient {
    inner: Arc<ApiClient>,
}

impl DatasetsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn create(&self, dataset: Dataset) -> CreateDatasetCall {
        CreateDatasetCall::new(self.inner.clone(), dataset)
    }

    /// Deleted datasets can be recovered with `undelete` for a period of time.
    pub fn delete(&self, dataset_id: &str) -> DeleteDatasetCall {
        DeleteDatasetCall::new(self.inner.clone(), dataset_id)
    }

    pub fn get(&self, dataset_id: &str) -> GetDatasetCall {
        GetDatasetCall::new(self.inner.clone(), dataset_id)
    }

    pub fn list(&self, project_id: &str) -> ListDatasetsCall {
        ListDatasetsCall::new(self.inner.clone(), project_id)
    }

    pub fn patch(&self, dataset_id: &str, dataset: Dataset) -> PatchDatasetCall {
        PatchDatasetCall::new(self.inner.clone(), dataset_id, dataset)
    }

    pub fn undelete(&self, dataset_id: &str) -> UndeleteDatasetCall {
        UndeleteDatasetCall::new(self.inner.clone(), dataset_id)
    }
}
