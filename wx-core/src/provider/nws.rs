//! weather.gov (National Weather Service) API client.
//!
//! Getting a forecast takes two requests:
//! - `/points/{lat},{lon}` returns `.properties.forecast`, the URL of the
//!   forecast for the grid cell containing that point;
//! - that URL returns `.properties.periods[]`, each with a `name` and a
//!   `detailedForecast` among other fields.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{ForecastResult, Period};

use super::{FetchError, JsonFetcher};

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// weather.gov rejects requests without a User-Agent.
pub const DEFAULT_USER_AGENT: &str =
    concat!("wx-cli/", env!("CARGO_PKG_VERSION"), " (+https://www.weather.gov/documentation/services-web-api)");

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
}

impl NwsClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl JsonFetcher for NwsClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(%url, "GET");

        let res = self
            .http
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// First-stage URL: `{base}/points/{lat},{lon}`.
pub fn points_url(latitude: f64, longitude: f64, base_url: &str) -> String {
    format!("{base_url}/points/{latitude},{longitude}")
}

/// `properties.forecast` of a points response.
pub fn extract_forecast_url(response: Option<&Value>) -> Option<String> {
    let url = response
        .and_then(|r| r.get("properties"))
        .and_then(|p| p.get("forecast"))
        .and_then(Value::as_str);

    if url.is_none() {
        tracing::warn!("Unexpected API response structure");
    }
    url.map(str::to_owned)
}

/// `properties.periods` of a forecast response, keyed by `location`.
///
/// An empty periods array is a valid answer.
pub fn extract_forecast_periods(response: Option<&Value>, location: &str) -> Option<ForecastResult> {
    let periods = response
        .and_then(|r| r.get("properties"))
        .and_then(|p| p.get("periods"))
        .and_then(|periods| Vec::<Period>::deserialize(periods).ok());

    match periods {
        Some(periods) => Some(ForecastResult::from([(location.to_string(), periods)])),
        None => {
            tracing::warn!("Unexpected API response structure");
            None
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
