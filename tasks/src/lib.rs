#![allow(clippy::result_large_err)]
//! # google-cloud-tasks
//!
//! Google Tasks v1 client library.
//!
//! ## Quick Start
//!
//! ```rust
//! use google_cloud_tasks::client::{ClientConfig, Client};
//! use google_cloud_tasks::http::error::Error;
//! use google_cloud_tasks::http::tasks::Task;
//! use google_cloud_tasks::http::{Nullable, Paginated};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!
//!     let mut lists = client.task_lists().list();
//!     lists.pages(|page| {
//!         for list in page.items {
//!             println!("{:?}", list.title);
//!         }
//!         Ok::<(), Error>(())
//!     }).await.unwrap();
//!
//!     // Clear the notes of a task.
//!     let patch = Task { notes: Nullable::Null, ..Default::default() };
//!     client.tasks().patch("list-id", "task-id", patch).send().await.unwrap();
//! }
//! ```
pub mod client;
pub mod http;
