//! Account record produced by discovery

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ServiceType;

/// Retry budget recorded on every discovered account.
///
/// Discovery never retries; callers use this when syncing later.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Remote service account
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Display name (host of the matched URL, with port if explicit)
    pub name: String,
    /// Owner; not set by discovery
    #[serde(default)]
    pub owner: String,
    /// Matched base URL, never with user-info
    pub url: String,
    /// Discovered service type
    pub service_type: ServiceType,
    /// API key; not set by discovery
    #[serde(default)]
    pub key: String,
    /// Resolved username
    #[serde(default)]
    pub user: String,
    /// Resolved password
    #[serde(default)]
    pub pass: String,
    /// Sharing enabled (caller default)
    #[serde(default)]
    pub share: bool,
    /// Sync enabled (caller default)
    #[serde(default)]
    pub sync: bool,
    /// Retry budget for later transfers
    pub retry_limit: u32,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("url", &self.url)
            .field("service_type", &self.service_type)
            .field("key", &if self.key.is_empty() { "" } else { "***" })
            .field("user", &self.user)
            .field("pass", &if self.pass.is_empty() { "" } else { "***" })
            .field("share", &self.share)
            .field("sync", &self.sync)
            .field("retry_limit", &self.retry_limit)
            .finish()
    }
}
