//! Plain-text summary of a weather report.

use crate::models::{IndexRange, WeatherReport};
use std::fmt::{Display, Write};

const NA: &str = "n/a";

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NA.to_string(), |v| v.to_string())
}

fn range(r: &IndexRange) -> String {
    match (r.from, r.to) {
        (Some(from), Some(to)) => format!("{from} to {to}"),
        (Some(from), None) => from.to_string(),
        _ => NA.to_string(),
    }
}

/// Render a report as aligned `label: value` lines.
pub fn render(report: &WeatherReport) -> String {
    let mut out = String::new();
    let current = &report.current;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Weather report ({})", report.scraped_at.to_rfc3339());
    let _ = writeln!(out, "  Temperature:  {} °C", or_na(current.temperature_celsius));
    let _ = writeln!(out, "  Humidity:     {} %", or_na(current.humidity_percent));
    let _ = writeln!(out, "  UV index:     {}", or_na(current.uv_index));
    let _ = writeln!(out, "  UV intensity: {}", or_na(current.uv_intensity.as_deref()));

    let sky = current
        .icon_condition
        .as_ref()
        .and_then(|c| c.caption.as_deref())
        .or(report.condition.description.as_deref());
    let _ = writeln!(out, "  Condition:    {}", or_na(sky));

    let warning = match (&report.warning.text, report.warning.effective_at) {
        (Some(text), Some(at)) => format!("{text} (since {})", at.format("%H:%M %d/%m/%Y")),
        (Some(text), None) => text.clone(),
        _ => "none".to_string(),
    };
    let _ = writeln!(out, "  Warning:      {warning}");

    let air = &report.air_quality;
    let _ = writeln!(
        out,
        "  AQHI:         general {}, roadside {}",
        range(&air.general),
        range(&air.roadside)
    );

    if !report.failures.is_empty() {
        let _ = writeln!(out, "  Failed sources:");
        for failure in &report.failures {
            let _ = writeln!(out, "    - {}: {}", failure.source, failure.error);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IconCondition, Source, SourceFailure};
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn test_render_full_report() {
        let mut report = WeatherReport::new(Utc.with_ymd_and_hms(2023, 8, 15, 6, 30, 0).unwrap());
        report.current.temperature_celsius = Some(29);
        report.current.humidity_percent = Some(84);
        report.current.icon_condition = Some(IconCondition {
            code: Some(65),
            caption: Some("Thunderstorms".to_string()),
            icon_url: "http://rss.weather.gov.hk/img/pic65.png".to_string(),
        });
        report.warning.text = Some("Thunderstorm Warning".to_string());
        report.warning.effective_at = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 8, 15, 14, 30, 0)
            .single();
        report.air_quality.general = IndexRange { from: Some(4), to: None };

        let text = render(&report);
        assert!(text.contains("Temperature:  29 °C"));
        assert!(text.contains("UV index:     n/a"));
        assert!(text.contains("Condition:    Thunderstorms"));
        assert!(text.contains("Warning:      Thunderstorm Warning (since 14:30 15/08/2023)"));
        assert!(text.contains("general 4, roadside n/a"));
        assert!(!text.contains("Failed sources"));
    }

    #[test]
    fn test_render_lists_failures() {
        let mut report = WeatherReport::new(Utc::now());
        report.failures.push(SourceFailure {
            source: Source::AirQuality,
            kind: "http_status".to_string(),
            error: "[500] http://www.aqhi.gov.hk/".to_string(),
        });
        let text = render(&report);
        assert!(text.contains("Warning:      none"));
        assert!(text.contains("- air_quality: [500] http://www.aqhi.gov.hk/"));
    }
}
