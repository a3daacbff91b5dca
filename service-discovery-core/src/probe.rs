//! Single-request reachability probe

use url::Url;

use crate::traits::HttpTransport;
use crate::types::{ProbeMethod, ProbeOutcome};
use crate::utils::log_sanitizer::{redact_url, truncate_for_log};

/// First status code treated as "not there".
const FIRST_FAILURE_STATUS: u16 = 400;

/// Probe `raw_url` with exactly one bodiless request.
///
/// Every failure path (unparsable URL, transport error, status >= 400)
/// collapses to [`ProbeOutcome::Unreachable`]. No retries.
pub async fn probe(
    transport: &dyn HttpTransport,
    method: ProbeMethod,
    raw_url: &str,
) -> ProbeOutcome {
    let url = match Url::parse(raw_url) {
        Ok(url) => url,
        Err(e) => {
            log::debug!(
                "[probe] {method} {}: cannot build request: {e}",
                truncate_for_log(raw_url)
            );
            return ProbeOutcome::Unreachable;
        }
    };
    probe_url(transport, method, &url).await
}

/// Same as [`probe`] for an already parsed URL.
pub async fn probe_url(
    transport: &dyn HttpTransport,
    method: ProbeMethod,
    url: &Url,
) -> ProbeOutcome {
    match transport.send(method, url).await {
        Ok(status) if status < FIRST_FAILURE_STATUS => {
            log::debug!("[probe] {method} {} -> {status}", redact_url(url));
            ProbeOutcome::Reachable
        }
        Ok(status) => {
            log::debug!(
                "[probe] {method} {} -> {status} (rejected)",
                redact_url(url)
            );
            ProbeOutcome::Unreachable
        }
        Err(e) => {
            log::debug!("[probe] {method} {} -> {e}", redact_url(url));
            ProbeOutcome::Unreachable
        }
    }
}
