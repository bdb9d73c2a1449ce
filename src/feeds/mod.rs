//! Per-source chains: fetch, normalize, extract.
//!
//! Each source has an extractor submodule holding its patterns and a chain
//! function here that runs the whole pipeline for that source and returns
//! the source's slice of the report.
//!
//! # Sources
//!
//! | Source | Module | Format | Slice |
//! |--------|--------|--------|-------|
//! | Current weather | [`current`] | RSS, prose bulletin | [`CurrentConditions`] |
//! | Condition lookup | [`condition`] | JSON API | [`Condition`] |
//! | Warning summary | [`warning`] | RSS, item titles | [`Warning`] |
//! | Air quality | [`air_quality`] | RSS, title + description | [`AirQuality`] |
//!
//! Chains never retry and never touch another source's slice. Every
//! failure is returned as a [`SourceError`] for the aggregator to record.

use crate::error::SourceError;
use crate::fetch::{Transport, fetch};
use crate::markup::normalize;
use crate::models::{AirQuality, Condition, CurrentConditions, Warning};
use tracing::{info, instrument};

pub mod air_quality;
pub mod condition;
pub mod condition_codes;
pub mod current;
pub mod warning;

#[cfg(test)]
pub(crate) mod fixtures;

/// Fetch and extract the current weather bulletin.
#[instrument(level = "info", skip_all, fields(source = "current_weather"))]
pub async fn current_weather<T: Transport>(
    transport: &T,
    url: &str,
) -> Result<CurrentConditions, SourceError> {
    let body = fetch(transport, url).await?;
    let document = normalize(&body)?;
    let current = current::extract(&document)?;
    info!(
        temperature_celsius = ?current.temperature_celsius,
        humidity_percent = ?current.humidity_percent,
        "Parsed current weather"
    );
    Ok(current)
}

/// Fetch and extract the coded condition from the JSON API.
#[instrument(level = "info", skip_all, fields(source = "condition"))]
pub async fn condition<T: Transport>(transport: &T, url: &str) -> Result<Condition, SourceError> {
    let body = fetch(transport, url).await?;
    let condition = condition::extract(&body)?;
    info!(id = ?condition.id, name = ?condition.name, "Parsed weather condition");
    Ok(condition)
}

/// Fetch and extract the most recent warning headline.
#[instrument(level = "info", skip_all, fields(source = "warning"))]
pub async fn warning<T: Transport>(transport: &T, url: &str) -> Result<Warning, SourceError> {
    let body = fetch(transport, url).await?;
    let document = normalize(&body)?;
    let warning = warning::extract(&document)?;
    info!(text = ?warning.text, "Parsed warning summary");
    Ok(warning)
}

/// Fetch and extract the air quality health index.
#[instrument(level = "info", skip_all, fields(source = "air_quality"))]
pub async fn air_quality<T: Transport>(
    transport: &T,
    url: &str,
) -> Result<AirQuality, SourceError> {
    let body = fetch(transport, url).await?;
    let document = normalize(&body)?;
    let air = air_quality::extract(&document)?;
    info!(
        general = ?air.general,
        roadside = ?air.roadside,
        "Parsed air quality"
    );
    Ok(air)
}
