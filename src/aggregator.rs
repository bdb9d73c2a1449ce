//! Concurrent fetch-and-merge of every feed into one [`WeatherReport`].
//!
//! All four source chains run concurrently on the calling task (no threads
//! are spawned) and the aggregator waits for every one of them to settle.
//! Successful slices are merged into the report; failed chains are logged
//! with their source name and listed in [`WeatherReport::failures`]. One
//! source failing never affects another source's fields.

use crate::config::FeedConfig;
use crate::error::{ConfigError, SourceError};
use crate::feeds;
use crate::fetch::{HttpTransport, Transport};
use crate::models::{Source, SourceFailure, WeatherReport};
use chrono::Utc;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Resolved request URLs for the four sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
    pub current_weather: String,
    pub condition: String,
    pub warning: String,
    pub air_quality: String,
}

impl FeedUrls {
    pub fn from_config(config: &FeedConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            current_weather: config.current_weather_url.clone(),
            condition: config.condition_api.url()?.to_string(),
            warning: config.warning_url.clone(),
            air_quality: config.air_quality_url.clone(),
        })
    }

    pub fn get(&self, source: Source) -> &str {
        match source {
            Source::CurrentWeather => &self.current_weather,
            Source::Condition => &self.condition,
            Source::Warning => &self.warning,
            Source::AirQuality => &self.air_quality,
        }
    }
}

/// Polls every feed and assembles the merged report.
#[derive(Debug)]
pub struct WeatherScraper<T> {
    transport: T,
    urls: FeedUrls,
}

impl WeatherScraper<HttpTransport> {
    /// Scraper using a `reqwest` transport built from `config`.
    pub fn from_config(config: &FeedConfig) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(transport, FeedUrls::from_config(config)?))
    }
}

impl<T: Transport> WeatherScraper<T> {
    pub fn new(transport: T, urls: FeedUrls) -> Self {
        Self { transport, urls }
    }

    pub fn urls(&self) -> &FeedUrls {
        &self.urls
    }

    /// Run one aggregation.
    ///
    /// Always returns a report. Inspect individual fields for absence, or
    /// [`WeatherReport::failures`] for which sources failed.
    #[instrument(level = "info", skip_all)]
    pub async fn get_weather(&self) -> WeatherReport {
        let t0 = Instant::now();
        let mut report = WeatherReport::new(Utc::now());
        info!("Aggregating weather feeds");

        let transport = &self.transport;
        let (current, condition, warning, air_quality) = futures::join!(
            feeds::current_weather(transport, &self.urls.current_weather),
            feeds::condition(transport, &self.urls.condition),
            feeds::warning(transport, &self.urls.warning),
            feeds::air_quality(transport, &self.urls.air_quality),
        );

        let failures = &mut report.failures;
        if let Some(slice) = settle(failures, Source::CurrentWeather, current) {
            report.current = slice;
        }
        if let Some(slice) = settle(failures, Source::Condition, condition) {
            report.condition = slice;
        }
        if let Some(slice) = settle(failures, Source::Warning, warning) {
            report.warning = slice;
        }
        if let Some(slice) = settle(failures, Source::AirQuality, air_quality) {
            report.air_quality = slice;
        }

        let failed = report.failures.len();
        info!(
            succeeded = Source::all().len() - failed,
            failed,
            elapsed_ms = t0.elapsed().as_millis(),
            "Aggregation complete"
        );
        report
    }
}

/// Turn one chain's outcome into its slice, recording and logging failures.
fn settle<S>(
    failures: &mut Vec<SourceFailure>,
    source: Source,
    outcome: Result<S, SourceError>,
) -> Option<S> {
    match outcome {
        Ok(slice) => Some(slice),
        Err(e) => {
            warn!(%source, kind = e.kind(), error = %e, "Source failed; leaving its fields absent");
            failures.push(SourceFailure {
                source,
                kind: e.kind().to_string(),
                error: e.to_string(),
            });
            None
        }
    }
}
