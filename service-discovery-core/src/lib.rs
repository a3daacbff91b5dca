//! # service-discovery-core
//!
//! Identifies the kind of remote service behind a URL: a named cloud
//! provider, a `WebDAV` server, or a plain web server.
//!
//! Discovery walks an ordered table of [`Heuristic`]s. Each rule is scoped to
//! a set of domains and a set of candidate paths, and is confirmed by probing
//! those paths over HTTP. The first rule that gets an answer below 400 wins.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use service_discovery_core::discover;
//!
//! # async fn demo() -> service_discovery_core::DiscoveryResult<()> {
//! let account = discover("https://cloud.example.com", "bob", "secret").await?;
//! println!("{} at {}", account.service_type, account.url);
//! # Ok(())
//! # }
//! ```
//!
//! Tests and embedders inject their own transport and rule table:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use service_discovery_core::{ReqwestTransport, ServiceDiscovery, DEFAULT_HEURISTICS};
//!
//! # async fn demo() -> service_discovery_core::DiscoveryResult<()> {
//! let discovery = ServiceDiscovery::with_heuristics(
//!     Arc::new(ReqwestTransport::default()),
//!     &DEFAULT_HEURISTICS[6..], // WebDAV and generic web only
//! );
//! let account = discovery.discover("https://dav.example.com", "", "").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! - [`DiscoveryError::InvalidUrl`]: the input does not parse
//! - [`DiscoveryError::NoServiceFound`]: every rule was tried without success
//!
//! Individual probe failures are not errors; they move the scan on to the
//! next candidate. Nothing is retried.

mod config;
mod error;
mod heuristics;
mod http_client;
mod probe;
mod services;
mod traits;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::ClientConfig;
pub use error::{DiscoveryError, DiscoveryResult, TransportError};
pub use heuristics::{DEFAULT_HEURISTICS, Heuristic, USER_PLACEHOLDER};
pub use http_client::{ReqwestTransport, create_http_client, shared_transport};
pub use probe::{probe, probe_url};
pub use services::ServiceDiscovery;
pub use traits::HttpTransport;
pub use types::{
    Account, DEFAULT_RETRY_LIMIT, ProbeMethod, ProbeOutcome, ServiceType, UnknownServiceType,
};

/// Identify the service behind `raw_url` with the process-wide client and
/// the built-in heuristic table.
///
/// See [`ServiceDiscovery::discover`].
pub async fn discover(raw_url: &str, user: &str, pass: &str) -> DiscoveryResult<Account> {
    ServiceDiscovery::new(shared_transport())
        .discover(raw_url, user, pass)
        .await
}
