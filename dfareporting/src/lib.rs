#![allow(clippy::result_large_err)]
//! # google-cloud-dfareporting
//!
//! Campaign Manager 360 (DFA Reporting) v4 client library.
//!
//! ## Quick Start
//!
//! ```rust
//! use google_cloud_dfareporting::client::{ClientConfig, Client};
//! use google_cloud_dfareporting::http::files::FileStatus;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!
//!     let profiles = client.user_profiles().list().send().await.unwrap();
//!     let profile_id = profiles.items[0].profile_id.unwrap();
//!
//!     let file = client.reports().run(profile_id, 12345).synchronous(true).send().await.unwrap();
//!     if file.status == Some(FileStatus::ReportAvailable) {
//!         let data = client.files().get(12345, file.id.unwrap()).download().await.unwrap();
//!     }
//! }
//! ```
pub mod client;
pub mod http;
