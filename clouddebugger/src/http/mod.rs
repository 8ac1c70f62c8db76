pub mod breakpoints;
pub mod breakpoints_client;
pub mod controller;
pub mod controller_client;
pub mod debuggees;
pub mod debuggees_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};

pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/cloud_debugger",
];
