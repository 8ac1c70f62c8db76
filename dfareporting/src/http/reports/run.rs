use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::files::File;

const PATH: &str = "userprofiles/{profileId}/reports/{reportId}/run";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunReportParams {
    /// If set and true, tries to run the report synchronously.
    pub synchronous: Option<bool>,
}

/// Runs a report. The returned file describes the pending or finished report output.
#[derive(Clone, Debug)]
pub struct RunReportCall {
    client: Arc<ApiClient>,
    profile_id: String,
    report_id: String,
    params: RunReportParams,
    options: CallOptions,
}

impl RunReportCall {
    pub(crate) fn new(client: Arc<ApiClient>, profile_id: i64, report_id: i64) -> Self {
        Self {
            client,
            profile_id: profile_id.to_string(),
            report_id: report_id.to_string(),
            params: RunReportParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn synchronous(mut self, synchronous: bool) -> Self {
        self.params.synchronous = Some(synchronous);
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::POST,
            PATH,
            &[
                ("profileId", self.profile_id.as_str()),
                ("reportId", self.report_id.as_str()),
            ],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<File, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for RunReportCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}
