//! 服务发现
//!
//! Normalizes the input URL and credentials, then walks the heuristic table
//! until one rule confirms its service.

use std::sync::Arc;

use url::Url;

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::heuristics::{DEFAULT_HEURISTICS, Heuristic};
use crate::traits::HttpTransport;
use crate::types::{Account, DEFAULT_RETRY_LIMIT};
use crate::utils::log_sanitizer::{redact_url, truncate_for_log};
use crate::utils::user_info;

/// Scheme assumed when the input has none.
const DEFAULT_SCHEME: &str = "https";

/// Service discovery orchestrator
///
/// Probes run one after another; a call issues at most one request at a
/// time and has no deadline of its own. Wrap the future in a timeout to
/// bound it.
pub struct ServiceDiscovery<'h> {
    transport: Arc<dyn HttpTransport>,
    heuristics: &'h [Heuristic],
}

impl ServiceDiscovery<'static> {
    /// Orchestrator over the built-in heuristic table
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_heuristics(transport, DEFAULT_HEURISTICS)
    }
}

impl<'h> ServiceDiscovery<'h> {
    /// Orchestrator over a caller-supplied heuristic table, scanned in slice order
    #[must_use]
    pub fn with_heuristics(
        transport: Arc<dyn HttpTransport>,
        heuristics: &'h [Heuristic],
    ) -> Self {
        Self {
            transport,
            heuristics,
        }
    }

    /// Identify the service behind `raw_url`.
    ///
    /// # Arguments
    /// * `raw_url` - URL as entered, may embed credentials; `https` is assumed without a scheme
    /// * `user` - Username, overrides the embedded one when non-empty
    /// * `pass` - Password, overrides the embedded one when non-empty
    ///
    /// # Errors
    /// * `DiscoveryError::InvalidUrl` - `raw_url` does not parse
    /// * `DiscoveryError::NoServiceFound` - no heuristic matched
    pub async fn discover(
        &self,
        raw_url: &str,
        user: &str,
        pass: &str,
    ) -> DiscoveryResult<Account> {
        let mut url = parse_with_default_scheme(raw_url)?;
        lowercase_host(&mut url)?;

        // 1. Resolve credentials: explicit arguments win over embedded user-info
        let (embedded_user, embedded_pass) = user_info::credentials(&url);
        let acc_user = if user.is_empty() {
            embedded_user
        } else {
            user.to_string()
        };
        let acc_pass = if pass.is_empty() {
            embedded_pass
        } else {
            pass.to_string()
        };
        if !acc_user.is_empty() || !acc_pass.is_empty() {
            user_info::embed(&mut url, &acc_user, &acc_pass);
        }

        let host = url.host_str().unwrap_or_default().to_string();
        log::debug!("Discovering service at {}", redact_url(&url));

        // 2. Scan heuristics in priority order
        for heuristic in self.heuristics {
            if !heuristic.matches_domain(&host) {
                continue;
            }

            let Some(mut matched) = heuristic
                .discover(self.transport.as_ref(), url.as_str(), &acc_user)
                .await
            else {
                continue;
            };

            user_info::strip(&mut matched);
            let account = Account {
                name: display_name(&matched),
                owner: String::new(),
                url: matched.to_string(),
                service_type: heuristic.service_type,
                key: String::new(),
                user: acc_user,
                pass: acc_pass,
                share: false,
                sync: false,
                retry_limit: DEFAULT_RETRY_LIMIT,
            };
            log::info!("Found {} service at {}", account.service_type, account.url);
            return Ok(account);
        }

        log::warn!("No supported service found at {}", sanitize_raw(raw_url));
        Err(DiscoveryError::NoServiceFound(raw_url.to_string()))
    }
}

/// Parse `raw`, assuming [`DEFAULT_SCHEME`] when it has no `scheme://` prefix.
fn parse_with_default_scheme(raw: &str) -> Result<Url, url::ParseError> {
    if has_scheme(raw) {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{DEFAULT_SCHEME}://{raw}"))
    }
}

/// `://` only counts when everything before it is a valid scheme, so a
/// nested URL in the path or query does not.
fn has_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Domain matching is case-sensitive against lowercase tables.
fn lowercase_host(url: &mut Url) -> Result<(), url::ParseError> {
    if let Some(host) = url.host_str() {
        let lower = host.to_lowercase();
        if lower != host {
            url.set_host(Some(&lower))?;
        }
    }
    Ok(())
}

/// Host of the matched URL, with the port when one is explicit.
fn display_name(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// The raw input may embed a password; never log it verbatim.
fn sanitize_raw(raw_url: &str) -> String {
    parse_with_default_scheme(raw_url)
        .map_or_else(|_| truncate_for_log(raw_url), |u| redact_url(&u))
}
