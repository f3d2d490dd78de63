//! Skald Client Library
//!
//! An async client for the Skald log/event-analytics API. It covers the
//! account and dataset read endpoints plus record ingestion:
//!
//! - [`Client::current_user`] - the user the token belongs to
//! - [`Client::list_datasets`] - all datasets visible to the token
//! - [`Client::get_dataset`] - a single dataset by name
//! - [`Client::ingest`] - submit a batch of records to a dataset
//!
//! Every operation sends one HTTP request with a bearer token, reads the
//! full (size-capped) response body, and decodes it into an owned value.
//! Returned values own all of their strings; dropping them releases
//! everything. There is no retry or rate-limit handling - errors surface
//! directly to the caller, who decides what to do next.
//!
//! # Quick Start
//!
//! ```no_run
//! use skald_client::{Client, IngestOptions};
//!
//! # async fn run() -> Result<(), skald_client::Error> {
//! let client = Client::with_token("xsat-your-token")?;
//!
//! // List datasets
//! for dataset in client.list_datasets().await? {
//!     println!("{}: {}", dataset.name, dataset.description);
//! }
//!
//! // Ingest a batch of records (JSON array, uncompressed)
//! let status = client
//!     .ingest(
//!         "my-dataset",
//!         br#"[{"event":"login","user":"jane"}]"#.as_slice(),
//!         IngestOptions::default(),
//!     )
//!     .await?;
//! assert_eq!(status.failed, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! [`Client`] is `Clone + Send + Sync`; clones share one connection pool.
//! See the type docs for details.

mod client;
mod config;
mod error;

pub mod datasets;
pub mod users;

// Re-export main types at crate root for convenience
pub use client::Client;
pub use config::{ClientConfig, UserEndpoint, DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_SIZE};
pub use datasets::{ContentEncoding, ContentType, Dataset, IngestFailure, IngestOptions, IngestStatus};
pub use error::{Error, Result};
pub use users::{Role, User};
