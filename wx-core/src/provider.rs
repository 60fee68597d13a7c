use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

pub mod nws;

/// Why a single GET against the forecast service failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("connection error: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP error {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status,
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
                body: String::new(),
            }
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Low-level call primitive: GET a URL and decode its JSON body.
///
/// Failures are typed by cause. Most callers want [`safe_fetch`] instead.
#[async_trait]
pub trait JsonFetcher: Send + Sync + Debug {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// GET `url`, downgrading transport and HTTP failures to `None`.
///
/// The failure is only reported through the log. An undecodable body is
/// passed on as `Value::Null` so the extractors flag it as an unexpected
/// response structure.
pub async fn safe_fetch(fetcher: &dyn JsonFetcher, url: &str) -> Option<Value> {
    match fetcher.fetch_json(url).await {
        Ok(body) => Some(body),
        Err(FetchError::Decode(err)) => {
            tracing::debug!(%url, error = %err, "unparseable response body");
            Some(Value::Null)
        }
        Err(err @ (FetchError::Connect(_) | FetchError::Timeout(_) | FetchError::Status { .. })) => {
            tracing::warn!(%url, "{err}");
            None
        }
        Err(err @ FetchError::Request(_)) => {
            tracing::warn!(%url, "unexpected failure: {err}");
            None
        }
    }
}
