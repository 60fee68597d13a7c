//! The two-stage lookup: location → points endpoint → forecast periods.

use thiserror::Error;

use crate::{
    catalog::{self, ResolveError},
    model::ForecastResult,
    provider::{
        JsonFetcher,
        nws::{extract_forecast_periods, extract_forecast_url, points_url},
        safe_fetch,
    },
};

/// Which stage of the lookup came back empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error(transparent)]
    UnknownLocation(#[from] ResolveError),

    #[error("No location data :(")]
    NoLocationData,

    #[error("Forecast URL not returned")]
    MissingForecastUrl,

    #[error("No forecast data for this location: {location}")]
    NoForecastData { location: String },

    #[error("Forecast for {location} has an unexpected structure")]
    MalformedForecast { location: String },
}

/// Fetch the forecast periods for a catalog location.
///
/// The result is keyed by the normalized location name. Requests are issued
/// one after the other; nothing is retried.
pub async fn fetch_forecast(
    fetcher: &dyn JsonFetcher,
    base_url: &str,
    location: &str,
) -> Result<ForecastResult, ForecastError> {
    let location = catalog::normalize_location(location);
    let coords = catalog::resolve(&location)?;

    let points = points_url(coords.latitude, coords.longitude, base_url);
    tracing::debug!(%location, url = %points, "resolving forecast endpoint");

    let points_resp = safe_fetch(fetcher, &points)
        .await
        .ok_or(ForecastError::NoLocationData)?;

    let forecast_url =
        extract_forecast_url(Some(&points_resp)).ok_or(ForecastError::MissingForecastUrl)?;
    tracing::debug!(%location, url = %forecast_url, "fetching forecast");

    let forecast_resp = safe_fetch(fetcher, &forecast_url)
        .await
        .ok_or_else(|| ForecastError::NoForecastData { location: location.clone() })?;

    extract_forecast_periods(Some(&forecast_resp), &location)
        .ok_or(ForecastError::MalformedForecast { location })
}
