//! Supplier payload fetcher
//!
//! Retrieval collaborator for the merge pipeline: validates the source URL,
//! downloads the payload, and decodes it as a JSON array of raw records. A
//! fetch failure yields no batch; the pipeline is never invoked for it.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Fetch failure kinds
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source URL failed validation before any request was made
    #[error("invalid source url: {0}")]
    InvalidUrl(String),

    /// The request could not be completed or returned an error status
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The payload decoded, but is not a JSON array of records
    #[error("source payload is not a JSON array of records")]
    Decode,
}

/// Supplier payload fetcher over a shared HTTP client
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a source URL: absolute, http(s), with a host
    pub fn validate_url(source_url: &str) -> Result<reqwest::Url, FetchError> {
        let url = reqwest::Url::parse(source_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{source_url}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{source_url}: unsupported scheme {:?}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(FetchError::InvalidUrl(format!("{source_url}: missing host")));
        }

        Ok(url)
    }

    /// Download and decode one supplier payload
    pub async fn fetch(&self, source_url: &str) -> Result<Vec<Value>, FetchError> {
        let url = Self::validate_url(source_url)?;
        debug!(url = %url, "Fetching supplier payload");

        let payload: Value = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match payload {
            Value::Array(records) => {
                info!(url = %url, records = records.len(), "Supplier payload fetched");
                Ok(records)
            }
            _ => Err(FetchError::Decode),
        }
    }
}
