pub mod datasets;
pub mod datasets_client;
pub mod operations;
pub mod operations_client;
pub mod read_group_sets;
pub mod read_group_sets_client;
pub mod variants;
pub mod variants_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};
pub use google_cloud_gax::longrunning::{ListOperationsResponse, Operation, Status};
pub use google_cloud_gax::paging::Paginated;

pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/genomics",
];
