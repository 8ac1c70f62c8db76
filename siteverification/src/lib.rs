#![allow(clippy::result_large_err)]
//! # google-cloud-siteverification
//!
//! Google Site Verification v1 client library.
//!
//! ## Quick Start
//!
//! Obtain a token, publish it on the site, then ask for verification.
//!
//! ```rust
//! use google_cloud_siteverification::client::{ClientConfig, Client};
//! use google_cloud_siteverification::http::web_resource::{Site, SiteType, VerificationMethod, WebResource};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!
//!     let site = Site {
//!         identifier: Some("example.com".to_string()),
//!         r#type: Some(SiteType::InetDomain),
//!     };
//!     let token = client.web_resource().get_token(site.clone(), VerificationMethod::DnsTxt).send().await.unwrap();
//!     println!("add TXT record {:?}", token.token);
//!
//!     let resource = WebResource { site: Some(site), ..Default::default() };
//!     let verified = client.web_resource().insert(VerificationMethod::DnsTxt, resource).send().await.unwrap();
//!     println!("verified {:?} owners={:?}", verified.id, verified.owners);
//! }
//! ```
pub mod client;
pub mod http;
