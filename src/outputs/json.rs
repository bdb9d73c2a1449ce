//! JSON output of the weather report.
//!
//! Absent fields are written as `null` so that every key is always present;
//! the `failures` list is only written when at least one source failed.

use crate::models::WeatherReport;
use crate::utils::{ensure_writable_dir, parent_dir};
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize a report, optionally pretty-printed.
pub fn to_json(report: &WeatherReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

/// Write a [`WeatherReport`] as JSON to `path`.
///
/// The parent directory is created and probed for writability first.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_report(
    report: &WeatherReport,
    path: &str,
    pretty: bool,
) -> Result<(), Box<dyn Error>> {
    let json = to_json(report, pretty)?;

    ensure_writable_dir(&parent_dir(path)).await?;

    fs::write(path, json).await?;
    info!(failures = report.failures.len(), "Wrote JSON report");
    Ok(())
}
