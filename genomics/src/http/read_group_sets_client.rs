use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::read_group_sets::delete::DeleteReadGroupSetCall;
use crate::http::read_group_sets::get::GetReadGroupSetCall;
use crate::http::read_group_sets::search::{SearchReadGroupSetsCall, SearchReadGroupSetsRequest};

#[derive(Clone, Debug)]
pub struct ReadGroupSetsClient {
    inner: Arc<ApiClient>,
}

impl ReadGroupSetsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn delete(&self, read_group_set_id: &str) -> DeleteReadGroupSetCall {
        DeleteReadGroupSetCall::new(self.inner.clone(), read_group_set_id)
    }

    pub fn get(&self, read_group_set_id: &str) -> GetReadGroupSetCall {
        GetReadGroupSetCall::new(self.inner.clone(), read_group_set_id)
    }

    pub fn search(&self, request: SearchReadGroupSetsRequest) -> SearchReadGroupSetsCall {
        SearchReadGroupSetsCall::new(self.inner.clone(), request)
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
    use crate::http::read_group_sets::search::SearchReadGroupSetsRequest;

    #[tokio::test]
    async fn test_get_and_delete() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/readgroupsets/CMvnhpKTFhDnk4_9zcKO3_YB"))
                .respond_with(json_encoded(json!({
                    "id": "CMvnhpKTFhDnk4_9zcKO3_YB",
                    "datasetId": "d",
                    "name": "NA12878",
                    "readGroups": [{
                        "id": "rg",
                        "sampleId": "NA12878",
                        "predictedInsertSize": 240,
                        "experiment": {"platformUnit": "HWI", "instrumentModel": "ILLUMINA"},
                        "programs": [{"id": "bwa", "name": "bwa", "version": "0.7"}]
                    }]
                }))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/readgroupsets/CMvnhpKTFhDnk4_9zcKO3_YB"))
                .respond_with(json_encoded(json!({}))),
        );
        let client = create_client(&server);
        let set = client
            .read_group_sets()
            .get("CMvnhpKTFhDnk4_9zcKO3_YB")
            .send()
            .await
            .unwrap();
        let group = &set.read_groups[0];
        assert_eq!(Some(240), group.predicted_insert_size);
        assert_eq!(Some("ILLUMINA".to_string()), group.experiment.as_ref().unwrap().instrument_model);
        assert_eq!(Some("0.7".to_string()), group.programs[0].version);
        client
            .read_group_sets()
            .delete("CMvnhpKTFhDnk4_9zcKO3_YB")
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/readgroupsets/search"),
                request::body(json_decoded(eq(json!({"datasetIds": ["d"], "name": "NA"})))),
            ])
            .respond_with(json_encoded(json!({"readGroupSets": [{"id": "1"}], "nextPageToken": "more"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/readgroupsets/search"),
                request::body(json_decoded(eq(json!({"datasetIds": ["d"], "name": "NA", "pageToken": "more"})))),
            ])
            .respond_with(json_encoded(json!({"readGroupSets": [{"id": "2"}]}))),
        );
        let client = create_client(&server);
        let request = SearchReadGroupSetsRequest {
            dataset_ids: vec!["d".to_string()],
            name: Some("NA".to_string()),
            ..Default::default()
        };
        let mut call = client.read_group_sets().search(request);
        let mut ids = vec![];
        call.pages(|page| {
            ids.extend(page.read_group_sets.into_iter().filter_map(|s| s.id));
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
        assert_eq!(vec!["1", "2"], ids);
    }
}
