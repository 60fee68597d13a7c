use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Geographic point, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A named spot in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Lowercase, trimmed lookup key.
    pub name: &'static str,
    pub coordinates: Coordinates,
    /// Feet above sea level.
    pub elevation: i32,
}

/// One forecast entry as served by weather.gov, e.g. "Tonight".
///
/// Only `name` and `detailedForecast` are required. The remaining fields are
/// display extras: a value of an unexpected shape becomes `None` rather than
/// rejecting the period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub name: String,
    pub detailed_forecast: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_daytime: Option<bool>,
    /// Plain number or a `{"unitCode", "value"}` quantitative value.
    #[serde(default, deserialize_with = "quantity", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub short_forecast: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_f64(),
        Value::Object(qv) => qv.get("value").and_then(Value::as_f64),
        _ => None,
    })
}

impl Period {
    pub fn new(name: impl Into<String>, detailed_forecast: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detailed_forecast: detailed_forecast.into(),
            ..Self::default()
        }
    }
}

/// Location name mapped to its ordered forecast periods.
pub type ForecastResult = BTreeMap<String, Vec<Period>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn period_decodes_weather_gov_shape() {
        let raw = json!({
            "number": 1,
            "name": "This Afternoon",
            "startTime": "2024-03-01T13:00:00-08:00",
            "endTime": "2024-03-01T18:00:00-08:00",
            "isDaytime": true,
            "temperature": 71,
            "temperatureUnit": "F",
            "temperatureTrend": null,
            "windSpeed": "5 to 10 mph",
            "windDirection": "SW",
            "icon": "https://api.weather.gov/icons/land/day/few?size=medium",
            "shortForecast": "Sunny",
            "detailedForecast": "Sunny, with a high near 71."
        });

        let period: Period = serde_json::from_value(raw).expect("period should decode");

        assert_eq!(period.name, "This Afternoon");
        assert_eq!(period.detailed_forecast, "Sunny, with a high near 71.");
        assert_eq!(period.temperature, Some(71.0));
        assert_eq!(period.wind_direction.as_deref(), Some("SW"));
        assert_eq!(
            period.start_time.map(|t| t.to_rfc3339()),
            Some("2024-03-01T13:00:00-08:00".to_string())
        );
    }

    #[test]
    fn quantitative_temperature_is_read() {
        let raw = json!({
            "name": "Tonight",
            "detailedForecast": "Clear.",
            "temperature": { "unitCode": "wmoUnit:degF", "value": 41 }
        });

        let period: Period = serde_json::from_value(raw).unwrap();

        assert_eq!(period.temperature, Some(41.0));
    }

    #[test]
    fn odd_extras_do_not_reject_the_period() {
        let raw = json!({
            "number": -1,
            "name": "Tonight",
            "detailedForecast": "Clear.",
            "startTime": "tonight-ish",
            "endTime": null,
            "isDaytime": "no",
            "temperature": 40.5,
            "temperatureUnit": 7,
            "windSpeed": { "unitCode": "wmoUnit:km_h-1", "value": 16 },
            "windDirection": ["SW"]
        });

        let period: Period = serde_json::from_value(raw).expect("extras are optional");

        assert_eq!(period.temperature, Some(40.5));
        assert_eq!(
            period,
            Period { temperature: Some(40.5), ..Period::new("Tonight", "Clear.") }
        );
    }

    #[test]
    fn period_requires_detailed_forecast() {
        let raw = json!({ "name": "Tonight" });
        assert!(serde_json::from_value::<Period>(raw).is_err());
    }

    #[test]
    fn minimal_period_serializes_without_optional_fields() {
        let period = Period::new("Tonight", "Clear skies");
        let value = serde_json::to_value(&period).unwrap();
        assert_eq!(value, json!({ "name": "Tonight", "detailedForecast": "Clear skies" }));
    }
}
