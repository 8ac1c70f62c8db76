pub mod web_resource;
pub mod web_resource_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};

pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/siteverification",
    "https://www.googleapis.com/auth/siteverification.verify_only",
];
