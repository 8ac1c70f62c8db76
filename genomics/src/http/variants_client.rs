use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::variants::create::CreateVariantCall;
use crate::http::variants::delete::DeleteVariantCall;
use crate::http::variants::get::GetVariantCall;
use crate::http::variants::patch::PatchVariantCall;
use crate::http::variants::search::{SearchVariantsCall, SearchVariantsRequest};
use crate::http::variants::Variant;

#[derive(Clone, Debug)]
pub struct VariantsClient {
    inner: Arc<ApiClient>,
}

impl VariantsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn create(&self, variant: Variant) -> CreateVariantCall {
        CreateVariantCall::new(self.inner.clone(), variant)
    }

    pub fn delete(&self, variant_id: &str) -> DeleteVariantCall {
        DeleteVariantCall::new(self.inner.clone(), variant_id)
    }

    pub fn get(&self, variant_id: &str) -> GetVariantCall {
        GetVariantCall::new(self.inner.clone(), variant_id)
    }

    pub fn patch(&self, variant_id: &str, variant: Variant) -> PatchVariantCall {
        PatchVariantCall::new(self.inner.clone(), variant_id, variant)
    }

    pub fn search(&self, request: SearchVariantsRequest) -> SearchVariantsCall {
        SearchVariantsCall::new(self.inner.clone(), request)
    }
}
