//! Probe request/outcome types

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method used to probe a candidate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeMethod {
    Get,
    Head,
    /// `WebDAV` collection listing (RFC 4918)
    Propfind,
}

impl ProbeMethod {
    /// Uppercase method token as sent on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Propfind => "PROPFIND",
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single probe.
///
/// Deliberately carries no failure detail: the heuristic scan only needs to
/// know whether to move on to the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Response received with a status below 400
    Reachable,
    /// Request construction or transport failed, or status was 400 or above
    Unreachable,
}

impl ProbeOutcome {
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable)
    }
}
