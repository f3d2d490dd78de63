//! The API client
//!
//! One reusable transport plus the shared request/response path every
//! operation goes through: attach the bearer token, send, read the full
//! body under the configured cap, decode JSON into the caller's type.

use bytes::{Bytes, BytesMut};
use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::datasets::{Dataset, IngestOptions, IngestStatus};
use crate::error::{Error, Result};
use crate::users::User;

/// Client for the Skald API
///
/// Holds the API token and one reqwest transport. Cloning is cheap and
/// clones share the underlying connection pool, so a single `Client` can
/// be used from many tasks concurrently; no external synchronization is
/// needed. Each operation is a single request that completes only after
/// the full response body has been read and decoded.
#[derive(Clone)]
pub struct Client {
    token: String,
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with the given token and configuration
    ///
    /// No network call is made; the transport is only constructed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if transport construction fails (e.g., TLS
    /// or proxy misconfiguration).
    pub fn new(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("skald-client/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Init(format!("HTTP client: {}", e)))?;

        let mut config = config;
        trim_trailing_slashes(&mut config.base_url);

        Ok(Self {
            token: token.into(),
            config,
            http,
        })
    }

    /// Create a client with the default configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if transport construction fails.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(token, ClientConfig::default())
    }

    /// The user the configured token belongs to
    ///
    /// Calls `/v1/user` or `/v2/user` depending on
    /// [`ClientConfig::user_endpoint`].
    pub async fn current_user(&self) -> Result<User> {
        self.request(Method::GET, self.config.user_endpoint.path(), None)
            .await
    }

    /// All datasets visible to the configured token
    pub async fn list_datasets(&self) -> Result<Vec<Dataset>> {
        self.request(Method::GET, "/v2/datasets", None).await
    }

    /// A single dataset by name
    ///
    /// The name is inserted into the URL path verbatim; callers must pass
    /// a valid, already-escaped path segment.
    pub async fn get_dataset(&self, name: &str) -> Result<Dataset> {
        self.request(Method::GET, &format!("/v2/datasets/{}", name), None)
            .await
    }

    /// Submit a batch of records to a dataset
    ///
    /// The body is sent as-is: a JSON array or newline-delimited JSON per
    /// `options.content_type`, already gzip-compressed by the caller when
    /// `options.content_encoding` is [`Gzip`](crate::ContentEncoding::Gzip).
    /// The dataset name is inserted into the URL path verbatim.
    pub async fn ingest(
        &self,
        dataset: &str,
        body: impl Into<Bytes>,
        options: IngestOptions,
    ) -> Result<IngestStatus> {
        self.request(
            Method::POST,
            &format!("/v1/datasets/{}/ingest", dataset),
            Some(RequestBody {
                bytes: body.into(),
                options,
            }),
        )
        .await
    }

    /// Shared request path for every operation
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(method = %method, path = path, "sending request");

        let mut request = self.http.request(method, &url).bearer_auth(&self.token);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, body.options.content_type.as_header());
            if let Some(encoding) = body.options.content_encoding.as_header() {
                request = request.header(CONTENT_ENCODING, encoding);
            }
            // Bytes body carries a known length; reqwest sets Content-Length
            request = request.body(body.bytes);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(path = path, status = status.as_u16(), "request failed");
            return Err(Error::Http { status });
        }

        let raw = self.read_body(response).await?;
        let value = serde_json::from_slice(&raw)?;
        debug!(path = path, bytes = raw.len(), "response decoded");
        Ok(value)
    }

    /// Read the full response body, enforcing the configured size cap
    ///
    /// A body that exceeds the cap fails the operation outright; it is
    /// never truncated into a partial decode.
    async fn read_body(&self, mut response: reqwest::Response) -> Result<Bytes> {
        let limit = self.config.max_response_size;
        let hint = response
            .content_length()
            .map(|n| n.min(limit as u64) as usize)
            .unwrap_or(0);
        let mut buf = BytesMut::with_capacity(hint);

        while let Some(chunk) = response.chunk().await? {
            if buf.len() + chunk.len() > limit {
                return Err(Error::ResponseTooLarge {
                    received: buf.len() + chunk.len(),
                    limit,
                });
            }
            buf.extend_from_slice(&chunk);
        }

        Ok(buf.freeze())
    }
}

/// Request body plus the headers that describe it
struct RequestBody {
    bytes: Bytes,
    options: IngestOptions,
}

/// Strip trailing slashes so path joining stays predictable
pub(crate) fn trim_trailing_slashes(base_url: &mut String) {
    while base_url.ends_with('/') {
        base_url.pop();
    }
}
