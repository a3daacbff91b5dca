//! HTTP client configuration

use std::time::Duration;

use serde::Deserialize;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the shared probe client.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// TCP/TLS connect timeout, seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, seconds
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every probe
    pub user_agent: String,
}

impl ClientConfig {
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: concat!("service-discovery/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
