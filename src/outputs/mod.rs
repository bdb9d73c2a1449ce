//! Rendering and writing of the aggregated report.
//!
//! # Submodules
//!
//! - [`json`]: serializes a [`WeatherReport`](crate::models::WeatherReport) to JSON, on stdout or to a file
//! - [`summary`]: renders a human-readable plain-text summary

pub mod json;
pub mod summary;
