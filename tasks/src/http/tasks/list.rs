use std::sync::Arc;

use async_trait::async_trait;
use google_cloud_gax::call::{Call, CallOptions, ConditionalCall};
use google_cloud_gax::error::Error;
use google_cloud_gax::http::ApiClient;
use google_cloud_gax::paging::Paginated;
use reqwest::Method;
use reqwest_middleware::RequestBuilder;
use time::OffsetDateTime;

use crate::http::tasks::Tasks;

const PATH: &str = "tasks/v1/lists/{tasklist}/tasks";

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    /// Upper bound for a task's completion date to filter by.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub completed_max: Option<OffsetDateTime>,
    /// Lower bound for a task's completion date to filter by.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub completed_min: Option<OffsetDateTime>,
    /// Upper bound for a task's due date to filter by.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub due_max: Option<OffsetDateTime>,
    /// Lower bound for a task's due date to filter by.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub due_min: Option<OffsetDateTime>,
    /// Maximum number of tasks returned on one page. The default is 20 (max allowed: 100).
    pub max_results: Option<i32>,
    pub page_token: Option<String>,
    /// Flag indicating whether completed tasks are returned in the result. Default is true.
    /// `show_hidden` must also be true to show tasks completed in first party clients.
    pub show_completed: Option<bool>,
    /// Flag indicating whether deleted tasks are returned in the result. Default is false.
    pub show_deleted: Option<bool>,
    /// Flag indicating whether hidden tasks are returned in the result. Default is false.
    pub show_hidden: Option<bool>,
    /// Lower bound for a task's last modification time to filter by.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_min: Option<OffsetDateTime>,
}

/// Returns all tasks in the specified task list.
#[derive(Clone, Debug)]
pub struct ListTasksCall {
    client: Arc<ApiClient>,
    tasklist: String,
    params: ListTasksParams,
    options: CallOptions,
}

impl ListTasksCall {
    pub(crate) fn new(client: Arc<ApiClient>, tasklist: &str) -> Self {
        Self {
            client,
            tasklist: tasklist.to_string(),
            params: ListTasksParams::default(),
            options: CallOptions::default(),
        }
    }

    pub fn completed_max(mut self, completed_max: OffsetDateTime) -> Self {
        self.params.completed_max = Some(completed_max);
        self
    }

    pub fn completed_min(mut self, completed_min: OffsetDateTime) -> Self {
        self.params.completed_min = Some(completed_min);
        self
    }

    pub fn due_max(mut self, due_max: OffsetDateTime) -> Self {
        self.params.due_max = Some(due_max);
        self
    }

    pub fn due_min(mut self, due_min: OffsetDateTime) -> Self {
        self.params.due_min = Some(due_min);
        self
    }

    pub fn max_results(mut self, max_results: i32) -> Self {
        self.params.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.params.page_token = Some(page_token.into());
        self
    }

    pub fn show_completed(mut self, show_completed: bool) -> Self {
        self.params.show_completed = Some(show_completed);
        self
    }

    pub fn show_deleted(mut self, show_deleted: bool) -> Self {
        self.params.show_deleted = Some(show_deleted);
        self
    }

    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.params.show_hidden = Some(show_hidden);
        self
    }

    pub fn updated_min(mut self, updated_min: OffsetDateTime) -> Self {
        self.params.updated_min = Some(updated_min);
        self
    }

    pub(crate) fn build(&self) -> Result<RequestBuilder, Error> {
        let builder = self.client.request(
            Method::GET,
            PATH,
            &[("tasklist", self.tasklist.as_str())],
            &self.options,
        )?;
        Ok(builder.query(&self.params))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn send(&self) -> Result<Tasks, Error> {
        let builder = self.build()?;
        self.client.send(builder, &self.options).await
    }
}

impl Call for ListTasksCall {
    fn options_mut(&mut self) -> &mut CallOptions {
        &mut self.options
    }
}

impl ConditionalCall for ListTasksCall {}

#[async_trait]
impl Paginated for ListTasksCall {
    type Page = Tasks;

    fn current_page_token(&self) -> Option<String> {
        self.params.page_token.clone()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.params.page_token = token;
    }

    async fn fetch_page(&self) -> Result<Tasks, Error> {
        self.send().await
    }
}
