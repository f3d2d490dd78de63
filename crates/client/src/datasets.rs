//! Dataset types and ingest options
//!
//! Wire shapes for the dataset endpoints, plus the content-type and
//! content-encoding selectors for [`Client::ingest`](crate::Client::ingest).

use serde::Deserialize;

/// A named, server-side collection of ingested records
///
/// A point-in-time snapshot of what the server returned; never mutated
/// after decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Unique dataset identifier
    pub id: String,
    /// Dataset name (also its URL path segment)
    pub name: String,
    /// Free-text description, may be empty
    pub description: String,
    /// Identifier of the user who created the dataset
    pub who: String,
    /// Creation timestamp, as the server formatted it
    pub created: String,
}

/// Server response to an ingest request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestStatus {
    /// Number of records stored
    pub ingested: u64,
    /// Number of records rejected
    pub failed: u64,
    /// One entry per rejected record, in submission order
    #[serde(default)]
    pub failures: Vec<IngestFailure>,
    /// Bytes of the request body the server processed
    pub processed_bytes: u64,
    /// Storage blocks created by this batch
    pub blocks_created: u64,
    /// Write-ahead-log length after this batch
    pub wal_length: u64,
}

/// A single rejected record from an ingest request
#[derive(Debug, Clone, Deserialize)]
pub struct IngestFailure {
    /// Timestamp of the failed record, as the server formatted it
    pub timestamp: String,
    /// Why the record was rejected
    pub error: String,
}

/// Encoding of the records inside an ingest request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// One JSON array of objects
    #[default]
    Json,
    /// Newline-delimited JSON, one object per line
    Ndjson,
}

impl ContentType {
    /// `Content-Type` header value for this encoding
    pub const fn as_header(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Ndjson => "application/x-ndjson",
        }
    }
}

/// Compression applied to an ingest request body
///
/// Selecting [`ContentEncoding::Gzip`] only sets the header; the caller
/// must supply an already-gzip-compressed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentEncoding {
    /// Uncompressed body, no header sent
    #[default]
    Identity,
    /// Gzip-compressed body, `Content-Encoding: gzip`
    Gzip,
}

impl ContentEncoding {
    /// `Content-Encoding` header value, or None when no header is sent
    pub const fn as_header(self) -> Option<&'static str> {
        match self {
            Self::Identity => None,
            Self::Gzip => Some("gzip"),
        }
    }
}

/// Options for [`Client::ingest`](crate::Client::ingest)
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Body format (default: JSON array)
    pub content_type: ContentType,
    /// Body compression (default: none)
    pub content_encoding: ContentEncoding,
}
