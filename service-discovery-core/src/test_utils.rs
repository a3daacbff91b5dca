//! 测试辅助模块
//!
//! Scripted transport standing in for the network.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::error::TransportError;
use crate::traits::HttpTransport;
use crate::types::ProbeMethod;
use crate::utils::user_info;

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// URL without user-info
    pub url: String,
    pub user: String,
    pub pass: String,
}

// ===== MockTransport =====

/// Answers from a script keyed by `(method, url without user-info)`.
///
/// Unscripted requests get `default_status`.
pub struct MockTransport {
    default_status: u16,
    script: RwLock<HashMap<(String, String), Result<u16, TransportError>>>,
    log: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn with_default_status(default_status: u16) -> Self {
        Self {
            default_status,
            script: RwLock::new(HashMap::new()),
            log: Mutex::new(Vec::new()),
        }
    }

    pub async fn respond(&self, method: &str, url: &str, status: u16) {
        self.script
            .write()
            .await
            .insert((method.to_string(), url.to_string()), Ok(status));
    }

    pub async fn fail(&self, method: &str, url: &str, error: TransportError) {
        self.script
            .write()
            .await
            .insert((method.to_string(), url.to_string()), Err(error));
    }

    /// `(method, url)` pairs in the order they were sent.
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.log
            .lock()
            .await
            .iter()
            .map(|r| (r.method.clone(), r.url.clone()))
            .collect()
    }

    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.log.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, method: ProbeMethod, url: &Url) -> Result<u16, TransportError> {
        let (user, pass) = user_info::credentials(url);
        let mut target = url.clone();
        user_info::strip(&mut target);

        let key = (method.as_str().to_string(), target.as_str().to_string());
        self.log.lock().await.push(RecordedRequest {
            method: key.0.clone(),
            url: key.1.clone(),
            user,
            pass,
        });

        self.script
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or(Ok(self.default_status))
    }
}
