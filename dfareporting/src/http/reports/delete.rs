use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::{ApiClient, Empty};
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

const PATH: &str = "userprofiles/{profileId}/reports/{reportId}";

/// Deletes a report by its ID.
#[derive(Clone, Debug)]
pub struct DeleteReportCall {
    client: Arc<ApiClient>,
    profile_id: String,
    report_id: String,
    options: CallOptions,
}

impl DeleteReportCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64, report_id: i64) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            report_id: report_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::DELETE,
            PATH,
            &[
                ("profileId", self.profile_id.as_str()),
                ("reportId", self.report_id.as_str()),
            ],
            &self.options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Empty, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for DeleteReportCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
