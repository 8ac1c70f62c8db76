use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::reports::delete::DeleteReportCall;
use crate::http::reports::get::GetReportCall;
use crate::http::reports::insert::InsertReportCall;
use crate::http::reports::list::ListReportsCall;
use crate::http::reports::patch::PatchReportCall;
use crate::http::reports::run::RunReportCall;
use crate::http::reports::update::UpdateReportCall;
use crate::http::reports::Report;

#[derive(Clone, Debug)]
pub struct ReportsClient {
    inner: Arc<ApiClient>,
}

impl ReportsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn delete(&self, profile_id: i64, report_id: i64) -> DeleteReportCall {
        DeleteReportCall::new(self.inner.clone(), profile_id, report_id)
    }

    pub fn get(&self, profile_id: i64, report_id: i64) -> GetReportCall {
        GetReportCall::new(self.inner.clone(), profile_id, report_id)
    }

    pub fn insert(&self, profile_id: i64, report: Report) -> InsertReportCall {
        InsertReportCall::new(self.inner.clone(), profile_id, report)
    }

    pub fn list(&self, profile_id: i64) -> ListReportsCall {
        ListReportsCall::new(self.inner.clone(), profile_id)
    }

    pub fn patch(&self, profile_id: i64, report_id: i64, report: Report) -> PatchReportCall {
        PatchReportCall::new(self.inner.clone(), profile_id, report_id, report)
    }

    pub fn run(&self, profile_id: i64, report_id: i64) -> RunReportCall {
        RunReportCall::new(self.inner.clone(), profile_id, report_id)
    }

    pub fn update(&self, profile_id: i64, report_id: i64, report: Report) -> UpdateReportCall {
        UpdateReportCall::new(self.inner.clone(), profile_id, report_id, report)
    }
}

#[cfg(test)]
mod test {
    use httptest::matchers::*;
    use httptest::responders::*;
    use httptest::{Expectation, Server};
    use serde_json::json;
    use time::macros::date;

    use google_cloud_gax::error::Error;
    use google_cloud_gax::paging::Paginated;

    use crate::client::test::create_client;
    use crate::http::files::FileStatus;
    use crate::http::reports::{
        DateRange, Delivery, DeliveryType, Recipient, RelativeDateRange, Report, ReportCriteria, ReportFormat,
        ReportType, SortedDimension,
    };
    use crate::http::{Scope, SortField, SortOrder};

    #[tokio::test]
    async fn test_insert() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/dfareporting/v4/userprofiles/1/reports"),
                request::body(json_decoded(eq(json!({
                    "name": "weekly",
                    "type": "STANDARD",
                    "format": "CSV",
                    "criteria": {
                        "dateRange": {"startDate": "2024-01-01", "endDate": "2024-01-31"},
                        "dimensions": [{"name": "campaign", "sortOrder": "DESCENDING"}],
                        "metricNames": ["impressions", "clicks"]
                    },
                    "delivery": {
                        "emailOwner": true,
                        "recipients": [{"email": "team@example.com", "deliveryType": "ATTACHMENT"}]
                    }
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "777",
                "name": "weekly",
                "lastModifiedTime": "1700000000000",
                "ownerProfileId": "1",
                "criteria": {"dateRange": {"startDate": "2024-01-01", "endDate": "2024-01-31"}}
            }))),
        );
        let client = create_client(&server);
        let report = Report {
            name: Some("weekly".to_string()),
            r#type: Some(ReportType::Standard),
            format: Some(ReportFormat::Csv),
            criteria: Some(ReportCriteria {
                date_range: Some(DateRange {
                    start_date: Some(date!(2024 - 01 - 01)),
                    end_date: Some(date!(2024 - 01 - 31)),
                    ..Default::default()
                }),
                dimensions: vec![SortedDimension {
                    name: Some("campaign".to_string()),
                    sort_order: Some(SortOrder::Descending),
                    ..Default::default()
                }],
                metric_names: vec!["impressions".to_string(), "clicks".to_string()],
                ..Default::default()
            }),
            delivery: Some(Delivery {
                email_owner: Some(true),
                recipients: vec![Recipient {
                    email: Some("team@example.com".to_string()),
                    delivery_type: Some(DeliveryType::Attachment),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        let created = client.reports().insert(1, report).send().await.unwrap();
        assert_eq!(Some(777), created.id);
        assert_eq!(Some(1700000000000), created.last_modified_time);
        let date_range = created.criteria.unwrap().date_range.unwrap();
        assert_eq!(Some(date!(2024 - 01 - 31)), date_range.end_date);
    }

    #[tokio::test]
    async fn test_list_pages() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports"),
                request::query(url_decoded(contains(("scope", "ALL")))),
                request::query(url_decoded(contains(("sortField", "NAME")))),
                request::query(url_decoded(contains(("sortOrder", "ASCENDING")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "1"}, {"id": "2"}], "nextPageToken": "p2"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports"),
                request::query(url_decoded(contains(("pageToken", "p2")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "3"}], "nextPageToken": ""}))),
        );
        let client = create_client(&server);
        let mut call = client
            .reports()
            .list(1)
            .scope(Scope::All)
            .sort_field(SortField::Name)
            .sort_order(SortOrder::Ascending);
        let mut ids = vec![];
        call.pages(|page| {
            ids.extend(page.items.into_iter().filter_map(|r| r.id));
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec![1, 2, 3], ids);
    }

    #[tokio::test]
    async fn test_patch_update_delete() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/dfareporting/v4/userprofiles/1/reports/777"),
                request::body(json_decoded(eq(json!({
                    "criteria": {"dateRange": {"relativeDateRange": "LAST_7_DAYS"}}
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "777"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/dfareporting/v4/userprofiles/1/reports/777"),
                request::body(json_decoded(eq(json!({"id": 777, "name": "renamed"})))),
            ])
            .respond_with(json_encoded(json!({"id": "777", "name": "renamed"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/dfareporting/v4/userprofiles/1/reports/777"))
                .respond_with(status_code(204)),
        );
        let client = create_client(&server);
        let patch = Report {
            criteria: Some(ReportCriteria {
                date_range: Some(DateRange {
                    relative_date_range: Some(RelativeDateRange::Last7Days),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        client.reports().patch(1, 777, patch).send().await.unwrap();

        let report = Report {
            id: Some(777),
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let updated = client.reports().update(1, 777, report).send().await.unwrap();
        assert_eq!(Some("renamed".to_string()), updated.name);

        let deleted = client.reports().delete(1, 777).send().await.unwrap();
        assert_eq!(204, deleted.server_response.status_code);
    }

    #[tokio::test]
    async fn test_run_and_get() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/dfareporting/v4/userprofiles/1/reports/777/run"),
                request::query(url_decoded(contains(("synchronous", "false")))),
            ])
            .respond_with(json_encoded(json!({"id": "55", "reportId": "777", "status": "PROCESSING"}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/dfareporting/v4/userprofiles/1/reports/777"))
                .respond_with(json_encoded(json!({"id": "777", "format": "EXCEL"}))),
        );
        let client = create_client(&server);
        let file = client.reports().run(1, 777).synchronous(false).send().await.unwrap();
        assert_eq!(Some(55), file.id);
        assert_eq!(Some(777), file.report_id);
        let status = file.status.unwrap();
        assert_eq!(FileStatus::Processing, status);
        assert!(!status.is_final());

        let report = client.reports().get(1, 777).send().await.unwrap();
        assert_eq!(Some(ReportFormat::Excel), report.format);
    }
}
