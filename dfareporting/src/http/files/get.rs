use std::sync::Arc;

use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;

use crate::http::files::File;

const PATH: &str = "reports/{reportId}/files/{fileId}";

/// Retrieves a report file by its report ID and file ID.
///
/// `send` returns the file metadata, `download` the report contents.
#[derive(Clone, Debug)]
pub struct GetFileCall {
    client: Arc<ApiClient>,
    report_id: String,
    file_id: String,
    options: CallOptions,
}

impl GetFileCall {
    pub(crate) fn new(client: Arc<ApiClient>, report_id: i64, file_id: i64) -> Self {
        Self {
            client,
            report_id: report_id.to_string(),
            file_id: file_id.to_string(),
            options: CallOptions::default(),
        }
    }

    pub(crate) fn build(&self, options: &CallOptions) -> Result<RequestBuilder, Error> {
        self.client.request(
            Method::GET,
            PATH,
            &[
                ("reportId", self.report_id.as_str()),
                ("fileId", self.file_id.as_str()),
            ],
            options,
        )
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<File, Error> {
        let builder = self.build(&self.options)?;
        self.client.send(builder, &self.options).await
    }

    /// Downloads the report data with `alt=media`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn download(&self) -> Result<Vec<u8>, Error> {
        let mut options = self.options.clone();
        options.set_media();
        let builder = self.build(&options)?;
        self.client.send_bytes(builder, &options).await
    }
}

impl Call for GetFileCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for GetFileCall {}
