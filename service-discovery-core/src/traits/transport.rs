//! HTTP transport abstract Trait

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;
use crate::types::ProbeMethod;

/// HTTP Transport Trait
///
/// Sends one bodiless request and reports the response status.
///
/// Implementations:
/// - [`ReqwestTransport`](crate::ReqwestTransport): shared `reqwest` client
/// - tests: scripted mock transport
///
/// User-info embedded in `url` is a credential, not part of the request
/// target; implementations should turn it into Basic authentication.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request
    ///
    /// # Arguments
    /// * `method` - Probe method
    /// * `url` - Absolute URL, possibly carrying user-info
    ///
    /// # Returns
    /// * `Ok(status)` - a response was received, whatever its status
    /// * `Err(TransportError)` - no response
    async fn send(&self, method: ProbeMethod, url: &Url) -> Result<u16, TransportError>;
}
