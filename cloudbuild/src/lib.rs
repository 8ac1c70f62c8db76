#![allow(clippy::result_large_err)]
//! # google-cloud-cloudbuild
//!
//! Google Cloud Platform Cloud Build client library.
//!
//! ## Quick Start
//!
//! ### CreateClient
//!
//! The function `with_auth()` will try and read the credentials from a file specified in the environment variable `GOOGLE_APPLICATION_CREDENTIALS`, `GOOGLE_APPLICATION_CREDENTIALS_JSON` or
//! from a metadata server.
//!
//! ```rust
//! use google_cloud_cloudbuild::client::{ClientConfig, Client};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//! }
//! ```
//!
//! ### Start a build
//!
//! ```rust
//! use google_cloud_cloudbuild::client::Client;
//! use google_cloud_cloudbuild::http::builds::{Build, BuildStep};
//!
//! async fn run(client: &Client, project_id: &str) {
//!     let build = Build {
//!         steps: vec![BuildStep {
//!             name: "gcr.io/cloud-builders/docker".to_string(),
//!             args: vec!["build".to_string(), "-t".to_string(), "gcr.io/my-project/app".to_string(), ".".to_string()],
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     };
//!     let operation = client.builds().create(project_id, build).send().await.unwrap();
//! }
//! ```
//!
//! ### List builds
//!
//! ```rust
//! use google_cloud_cloudbuild::client::Client;
//! use google_cloud_cloudbuild::http::error::Error;
//! use google_cloud_cloudbuild::http::Paginated;
//!
//! async fn run(client: &Client, project_id: &str) {
//!     let mut call = client.builds().list(project_id).page_size(50);
//!     call.pages(|page| {
//!         for build in page.builds {
//!             println!("{:?}", build.id);
//!         }
//!         Ok::<(), Error>(())
//!     }).await.unwrap();
//! }
//! ```
pub mod client;
pub mod http;
