use std::sync::Arc;

use google_cloud_gax::http::ApiClient;

use crate::http::task_lists::delete::DeleteTaskListCall;
use crate::http::task_lists::get::GetTaskListCall;
use crate::http::task_lists::insert::InsertTaskListCall;
use crate::http::task_lists::list::ListTaskListsCall;
use crate::http::task_lists::patch::PatchTaskListCall;
use crate::http::task_lists::update::UpdateTaskListCall;
use crate::http::task_lists::TaskList;

#[derive(Clone, Debug)]
pub struct TaskListsClient {
    inner: Arc<ApiClient>,
}

impl TaskListsClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    pub fn delete(&self, tasklist: &str) -> DeleteTaskListCall {
        DeleteTaskListCall::new(self.inner.clone(), tasklist)
    }

    pub fn get(&self, tasklist: &str) -> GetTaskListCall {
        GetTaskListCall::new(self.inner.clone(), tasklist)
    }

    pub fn insert(&self, task_list: TaskList) -> InsertTaskListCall {
        InsertTaskListCall::new(self.inner.clone(), task_list)
    }

    pub fn list(&self) -> ListTaskListsCall {
        ListTaskListsCall::new(self.inner.clone())
    }

    pub fn patch(&self, tasklist: &str, task_list: TaskList) -> PatchTaskListCall {
        PatchTaskListCall::new(self.inner.clone(), tasklist, task_list)
    }

    pub fn update(&self, tasklist: &str, task_list: TaskList) -> UpdateTaskListCall {
        UpdateTaskListCall::new(self.inner.clone(), tasklist, task_list)
    }
}
