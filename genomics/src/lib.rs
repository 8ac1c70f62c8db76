#![allow(clippy::result_large_err)]
//! # google-cloud-genomics
//!
//! Google Genomics v1 client library.
//!
//! ## Quick Start
//!
//! ```rust
//! use google_cloud_genomics::client::{ClientConfig, Client};
//! use google_cloud_genomics::http::error::Error;
//! use google_cloud_genomics::http::variants::search::SearchVariantsRequest;
//! use google_cloud_genomics::http::Paginated;
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!
//!     let request = SearchVariantsRequest {
//!         variant_set_ids: vec!["vs-1".to_string()],
//!         reference_name: Some("chr1".to_string()),
//!         start: Some(10_000),
//!         end: Some(20_000),
//!         ..Default::default()
//!     };
//!     let mut call = client.variants().search(request);
//!     call.pages(|page| {
//!         for variant in page.variants {
//!             println!("{:?} {:?}", variant.id, variant.alternate_bases);
//!         }
//!         Ok::<(), Error>(())
//!     }).await.unwrap();
//! }
//! ```
pub mod client;
pub mod http;
