#![allow(clippy::result_large_err)]
//! # google-cloud-clouddebugger
//!
//! Google Cloud Platform Cloud Debugger client library.
//!
//! ## Quick Start
//!
//! ### CreateClient
//!
//! ```rust
//! use google_cloud_clouddebugger::client::{ClientConfig, Client};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//! }
//! ```
//!
//! ### Set a snapshot breakpoint
//!
//! ```rust
//! use google_cloud_clouddebugger::client::Client;
//! use google_cloud_clouddebugger::http::breakpoints::{Breakpoint, SourceLocation};
//!
//! async fn run(client: &Client, debuggee_id: &str) {
//!     let breakpoint = Breakpoint {
//!         location: Some(SourceLocation {
//!             path: Some("src/main.rs".to_string()),
//!             line: Some(42),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!     let response = client.breakpoints().set(debuggee_id, breakpoint).client_version("my-tool/1.0").send().await.unwrap();
//! }
//! ```
//!
//! ### Wait for breakpoint changes
//!
//! Listing breakpoints is a hanging GET. Pass the `next_wait_token` of the previous response to block
//! until the list changes.
//!
//! ```rust
//! use google_cloud_clouddebugger::client::Client;
//!
//! async fn run(client: &Client, debuggee_id: &str, agent_id: &str) {
//!     let mut wait_token: Option<String> = None;
//!     loop {
//!         let mut call = client.controller().list_active_breakpoints(debuggee_id).agent_id(agent_id);
//!         if let Some(token) = &wait_token {
//!             call = call.wait_token(token);
//!         }
//!         let response = call.send().await.unwrap();
//!         if !response.wait_expired {
//!             println!("{} active breakpoints", response.breakpoints.len());
//!         }
//!         wait_token = response.next_wait_token;
//!     }
//! }
//! ```
pub mod client;
pub mod http;
