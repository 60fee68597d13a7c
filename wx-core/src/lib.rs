//! Core library for the `wx` CLI.
//!
//! This crate defines:
//! - The built-in location catalog and name resolution
//! - A small weather.gov client and the two-stage forecast lookup
//! - Configuration handling
//! - Shared domain models (coordinates, forecast periods)
//!
//! It is used by `wx-cli`, but can also be reused by other binaries or services.

pub mod catalog;
pub mod config;
pub mod forecast;
pub mod model;
pub mod provider;

pub use catalog::ResolveError;
pub use config::Config;
pub use forecast::{ForecastError, fetch_forecast};
pub use model::{Coordinates, ForecastResult, Location, Period};
pub use provider::{FetchError, JsonFetcher, nws::NwsClient, safe_fetch};
