use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::reports::Report;

const PATH: &str = "userprofiles/{profileId}/reports/{reportId}";

/// Updates a report.
#[derive(Clone, Debug)]
pub struct UpdateReportCall {
    client: Arc<ApiClient>,
    profile_id: String,
    report_id: String,
    report: Report,
    options: CallOptions,
}

impl UpdateReportCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64, report_id: i64, report: Report) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            report_id: report_id.to_string(),
            report,
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::PUT,
            PATH,
            &[
                ("profileId", self.profile_id.as_str()),
                ("reportId", self.report_id.as_str()),
            ],
            &self.options,
        )?;
        Ok(builder.json(&self.report))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Report, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for UpdateReportCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
