#![allow(clippy::result_large_err)]
//! # google-cloud-gax
//!
//! Shared REST call machinery for the Google API client crates in this workspace.
//!
//! * [`http::ApiClient`] builds request URLs from path templates, authorizes and sends requests,
//!   and decodes JSON responses.
//! * [`call`] contains the options every call builder carries (system parameters, extra headers,
//!   `If-None-Match` and cancellation).
//! * [`paging`] drives list calls page by page.
//! * [`nullable::Nullable`] lets a request send an explicit JSON `null`.
pub mod call;
pub mod cancel;
pub mod error;
pub mod http;
pub mod longrunning;
pub mod nullable;
pub mod paging;
