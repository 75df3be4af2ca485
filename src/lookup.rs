//! Leak lookup client for the k-anonymity range API.

use std::future::Future;

use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use thiserror::Error;

use crate::config::CheckConfig;

/// User agent sent with every range request.
const CLIENT_USER_AGENT: &str = concat!("pwd-check/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Range request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Range service responded with status code {0}")]
    Status(StatusCode),
}

/// Source of leak record ranges addressed by hash prefix.
///
/// The orchestrator is generic over this trait; tests substitute an
/// in-memory provider for the remote service.
pub trait RangeProvider {
    /// Fetches the leak records for a hash prefix.
    ///
    /// # Returns
    /// The raw response body, one `SUFFIX:COUNT` entry per line.
    fn get_range(&self, prefix: &str) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Client for the remote range lookup service.
///
/// Issues one fresh request per evaluation; no caching, no retry. A
/// superseded request is not aborted, its result is simply never applied.
#[derive(Debug, Clone)]
pub struct PwnedClient {
    client: reqwest::Client,
    api_base: String,
}

impl PwnedClient {
    /// Creates a client for the service configured in `config`.
    pub fn new(config: &CheckConfig) -> Self {
        PwnedClient {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
        }
    }
}

impl RangeProvider for PwnedClient {
    async fn get_range(&self, prefix: &str) -> Result<String, LookupError> {
        let url = format!("{}{}", self.api_base, prefix);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::error!("range lookup for prefix {} failed: {}", prefix, status);
            return Err(LookupError::Status(status));
        }
        Ok(response.text().await?)
    }
}
