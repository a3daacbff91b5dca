//! reqwest-backed HTTP transport
//!
//! One process-wide client serves every discovery call. The client keeps no
//! cookie jar and is only ever read, so concurrent discoveries can share it.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::traits::HttpTransport;
use crate::types::ProbeMethod;
use crate::utils::log_sanitizer::redact_url;
use crate::utils::user_info;

/// Process-wide transport, built with [`ClientConfig::default`] on first use.
static SHARED_TRANSPORT: LazyLock<Arc<ReqwestTransport>> =
    LazyLock::new(|| Arc::new(ReqwestTransport::default()));

/// Returns the process-wide transport.
pub fn shared_transport() -> Arc<dyn HttpTransport> {
    SHARED_TRANSPORT.clone()
}

/// 创建带超时配置的 HTTP Client
///
/// Redirects follow reqwest's default policy.
///
/// # Panics
/// When the TLS backend cannot be initialized.
#[allow(clippy::expect_used)]
pub fn create_http_client(config: &ClientConfig) -> Client {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .expect("Failed to create HTTP client")
}

/// [`HttpTransport`] over a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: create_http_client(config),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

/// Split user-info off `url`, returning the decoded credentials.
fn take_credentials(url: &mut Url) -> Option<(String, Option<String>)> {
    if !user_info::has_credentials(url) {
        return None;
    }
    let has_password = url.password().is_some();
    let (user, pass) = user_info::credentials(url);
    user_info::strip(url);
    Some((user, has_password.then_some(pass)))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, method: ProbeMethod, url: &Url) -> Result<u16, TransportError> {
        let http_method = Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut target = url.clone();
        let credentials = take_credentials(&mut target);

        let mut request = self.client.request(http_method, target);
        if let Some((user, pass)) = credentials {
            request = request.basic_auth(user, pass);
        }

        let response = request.send().await.map_err(|e| {
            log::debug!("{method} {} failed: {e}", redact_url(url));
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        Ok(response.status().as_u16())
    }
}
