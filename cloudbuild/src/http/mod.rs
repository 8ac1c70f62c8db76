pub mod builds;
pub mod builds_client;
pub mod operations;
pub mod operations_client;
pub mod triggers;
pub mod triggers_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};
pub use google_cloud_gax::longrunning::{Operation, Status};
pub use google_cloud_gax::paging::Paginated;

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
