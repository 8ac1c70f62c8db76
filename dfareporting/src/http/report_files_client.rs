use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::report_files::get::GetReportFileCall;
use crate::http::report_files::list::ListReportFilesCall;

#[derive(Clone, Debug)]
pub struct ReportFilesClient {
    inner: Arc<ApiClient>,
}

impl ReportFilesClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn get(&self, profile_id: i64, report_id: i64, file_id: i64) -> GetReportFileCall {
        GetReportFileCall::new(self.inner.clone(), profile_id, report_id, file_id)
    }

    pub fn list(&self, profile_id: i64, report_id: i64) -> ListReportFilesCall {
        ListReportFilesCall::new(self.inner.clone(), profile_id, report_id)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;

    use google_cloud_gax::error::Error;
    use google_cloud_gax::paging::Paginated;

    use crate::client::test::create_client;
    use crate::http::{SortField, SortOrder};

    #[tokio::test]
    async fn test_get_and_download() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports/777/files/55"),
                request::query(url_decoded(contains(("alt", "json")))),
            ])
            .respond_with(json_encoded(json!({
                "id": "55",
                "status": "REPORT_AVAILABLE",
                "urls": {"apiUrl": "https://example.com/api", "browserUrl": "https://example.com/browser"}
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports/777/files/55"),
                request::query(url_decoded(contains(("alt", "media")))),
            ])
            .respond_with(status_code(200).body("a,b\n1,2\n")),
        );
        let client = create_client(&server);
        let call = client.report_files().get(1, 777, 55);
        let file = call.send().await.unwrap();
        assert!(file.status.unwrap().is_final());
        assert_eq!(Some("https://example.com/api".to_string()), file.urls.unwrap().api_url);
        let data = call.download().await.unwrap();
        assert_eq!(b"a,b\n1,2\n".to_vec(), data);
    }

    #[tokio::test]
    async fn test_list() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports/777/files"),
                request::query(url_decoded(contains(("maxResults", "1")))),
                request::query(url_decoded(contains(("sortField", "LAST_MODIFIED_TIME")))),
                request::query(url_decoded(contains(("sortOrder", "DESCENDING")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "1"}], "nextPageToken": "x"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports/777/files"),
                request::query(url_decoded(contains(("pageToken", "x")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "2"}]}))),
        );
        let client = create_client(&server);
        let mut call = client
            .report_files()
            .list(1, 777)
            .max_results(1)
            .sort_field(SortField::LastModifiedTime)
            .sort_order(SortOrder::Descending);
        let mut pages = 0;
        call.pages(|page| {
            pages += 1;
            assert_eq!(1, page.items.len());
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(2, pages);
    }
}
