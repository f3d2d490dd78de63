//! Client configuration
//!
//! Knobs for the transport and for the two service details that vary
//! between deployments: the base URL and the current-user endpoint
//! version.

use std::time::Duration;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.skald.rs";

/// Default response body cap (1 MiB)
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 1024 * 1024;

/// Default transport timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Version of the current-user endpoint to call
///
/// Deployments differ on which version they serve; pick the one your
/// deployment exposes rather than assuming either is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserEndpoint {
    /// `GET /v1/user`
    V1,
    /// `GET /v2/user`
    #[default]
    V2,
}

impl UserEndpoint {
    /// Request path for this endpoint version
    pub const fn path(self) -> &'static str {
        match self {
            Self::V1 => "/v1/user",
            Self::V2 => "/v2/user",
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: https://api.skald.rs)
    pub base_url: String,

    /// Which current-user endpoint version to call (default: v2)
    pub user_endpoint: UserEndpoint,

    /// Maximum accepted response body size in bytes (default: 1 MiB).
    /// A larger body fails the operation; it is never truncated.
    pub max_response_size: usize,

    /// Transport timeout covering the whole request (default: 30s)
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_endpoint: UserEndpoint::default(),
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
