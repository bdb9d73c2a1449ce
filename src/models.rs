//! Data models for the aggregated weather report.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`WeatherReport`]: the merged result of one aggregation run
//! - Per-source slices: [`CurrentConditions`], [`Condition`], [`Warning`], [`AirQuality`]
//! - [`Source`] and [`SourceFailure`]: which feed failed and why
//!
//! Every extracted field is an `Option`. `None` is the absent marker and
//! serializes as JSON `null`, so consumers can tell "not reported" apart from
//! zero or an empty string. Keys are snake_case; the roadside station group is
//! always spelled `roadside`.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four feeds the aggregator polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    CurrentWeather,
    Condition,
    Warning,
    AirQuality,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::CurrentWeather => "current_weather",
            Source::Condition => "condition",
            Source::Warning => "warning",
            Source::AirQuality => "air_quality",
        }
    }

    pub const fn all() -> &'static [Source] {
        &[
            Source::CurrentWeather,
            Source::Condition,
            Source::Warning,
            Source::AirQuality,
        ]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source chain that settled with an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFailure {
    /// The feed whose chain failed.
    pub source: Source,
    /// Error category, e.g. `"http_status"` or `"missing_data"`.
    pub kind: String,
    /// Human-readable error message.
    pub error: String,
}

/// The merged weather report produced by one aggregation run.
///
/// Each feed owns a disjoint slice of the report. Fields of a slice whose
/// feed failed stay `None`, and the failure is listed in [`Self::failures`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// When the aggregation started.
    pub scraped_at: DateTime<Utc>,
    /// Readings from the current weather feed.
    #[serde(flatten)]
    pub current: CurrentConditions,
    /// Coded condition from the external condition API.
    pub condition: Condition,
    /// Most recent warning headline.
    pub warning: Warning,
    /// Air quality health index ranges.
    pub air_quality: AirQuality,
    /// Sources that failed during this run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SourceFailure>,
}

impl WeatherReport {
    /// Report shell with every field absent.
    pub fn new(scraped_at: DateTime<Utc>) -> Self {
        Self {
            scraped_at,
            current: CurrentConditions::default(),
            condition: Condition::default(),
            warning: Warning::default(),
            air_quality: AirQuality::default(),
            failures: Vec::new(),
        }
    }

    /// Whether the given source settled with an error in this run.
    pub fn failed(&self, source: Source) -> bool {
        self.failures.iter().any(|f| f.source == source)
    }
}

/// Slice owned by the current weather feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_celsius: Option<i32>,
    pub humidity_percent: Option<u8>,
    pub uv_index: Option<f64>,
    pub uv_intensity: Option<String>,
    /// Condition decoded from the bulletin's icon filename.
    pub icon_condition: Option<IconCondition>,
}

/// Weather condition derived from a two-digit icon code.
///
/// `caption` is `None` when the code is not in the condition code table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconCondition {
    pub code: Option<u8>,
    pub caption: Option<String>,
    pub icon_url: String,
}

/// Slice owned by the external condition API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Slice owned by the warning summary feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// When the warning took effect, in Hong Kong time.
    pub effective_at: Option<DateTime<FixedOffset>>,
    pub text: Option<String>,
}

/// Slice owned by the air quality feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub published_at: Option<DateTime<FixedOffset>>,
    pub general: IndexRange,
    pub roadside: IndexRange,
}

/// A health risk index range reported for a group of stations.
///
/// `to` stays `None` when the feed reports a single value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub from: Option<u8>,
    pub to: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_source_as_str_matches_serde_name() {
        for source in Source::all() {
            let json = serde_json::to_string(source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.as_str()));
        }
    }

    #[test]
    fn test_empty_report_serializes_absent_fields_as_null() {
        let scraped_at = Utc.with_ymd_and_hms(2023, 8, 15, 6, 30, 0).unwrap();
        let report = WeatherReport::new(scraped_at);
        let value = serde_json::to_value(&report).unwrap();

        assert!(value["temperature_celsius"].is_null());
        assert!(value["humidity_percent"].is_null());
        assert!(value["uv_index"].is_null());
        assert!(value["uv_intensity"].is_null());
        assert!(value["icon_condition"].is_null());
        assert!(value["condition"]["id"].is_null());
        assert!(value["warning"]["effective_at"].is_null());
        assert!(value["warning"]["text"].is_null());
        assert!(value["air_quality"]["general"]["from"].is_null());
        assert!(value["air_quality"]["roadside"]["to"].is_null());
        assert!(value.get("failures").is_none());
    }

    #[test]
    fn test_report_deserialization() {
        let json = r#"{
            "scraped_at": "2023-08-15T06:30:00Z",
            "temperature_celsius": 29,
            "humidity_percent": 84,
            "uv_index": 2.0,
            "uv_intensity": "low",
            "icon_condition": null,
            "condition": {"id": 500, "name": "Rain", "description": "light rain", "icon": "10d"},
            "warning": {"effective_at": null, "text": null},
            "air_quality": {
                "published_at": "2015-02-15T16:30:00+08:00",
                "general": {"from": 4, "to": 7},
                "roadside": {"from": 6, "to": null}
            },
            "failures": [{"source": "warning", "kind": "http_status", "error": "[500] http://x"}]
        }"#;

        let report: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.current.temperature_celsius, Some(29));
        assert_eq!(report.condition.name.as_deref(), Some("Rain"));
        assert_eq!(report.air_quality.roadside, IndexRange { from: Some(6), to: None });
        assert!(report.failed(Source::Warning));
        assert!(!report.failed(Source::AirQuality));
    }
}
