//! Unified error type definition

use thiserror::Error;

/// Discovery error type
///
/// Probe failures never show up here: they only steer the heuristic scan
/// towards the next candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The raw URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Every heuristic was tried and none matched; carries the raw input verbatim
    #[error("no supported service found at {0}")]
    NoServiceFound(String),
}

/// Discovery Result type alias
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;

/// Failure of a single HTTP exchange, as reported by an [`HttpTransport`].
///
/// [`HttpTransport`]: crate::traits::HttpTransport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built (unknown method token, unusable URL, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection, DNS or TLS level failure
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    /// Whether a caller that does retry could expect a different outcome.
    ///
    /// Discovery itself never retries; the classification is exposed for
    /// callers that schedule their own retries up to `Account::retry_limit`.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }
}
