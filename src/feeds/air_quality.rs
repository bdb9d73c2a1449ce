//! Air Quality Health Index extractor.
//!
//! The item title carries the publication time and the description carries
//! the index ranges for the two station groups:
//!
//! ```text
//! HKSAR Air Quality Health Index at : Sun, 15 Feb 2015 16:30:00 +0800 Current Condition
//! General Stations: 4 to 7 (Health Risk: Moderate to High)
//! Roadside Stations: 6 to 10 (Health Risk: Moderate to Very High)
//! ```
//!
//! When every station in a group reports the same index the feed drops the
//! `to Y` part; the upper bound is then left absent, not copied from `from`.

use crate::error::SourceError;
use crate::markup::select_text;
use crate::models::{AirQuality, IndexRange};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::debug;

pub const TITLE_SELECTOR: &str = "item title";
pub const DESCRIPTION_SELECTOR: &str = "item description";

static PUBLISHED_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"HKSAR Air Quality Health Index at : (.+? \+0800)")
        .expect("AQHI timestamp pattern is valid")
});
static GENERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"General Stations: (\d+)(?: to (\d+))?").expect("general stations pattern is valid")
});
static ROADSIDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Roadside Stations: (\d+)(?: to (\d+))?")
        .expect("roadside stations pattern is valid")
});

/// Extract the AQHI publication time and station ranges from a parsed feed.
pub fn extract(document: &Html) -> Result<AirQuality, SourceError> {
    let title = select_text(document, TITLE_SELECTOR)?;
    let description = select_text(document, DESCRIPTION_SELECTOR)?;
    let (general, roadside) = station_ranges(&description);
    Ok(AirQuality {
        published_at: published_at(&title),
        general,
        roadside,
    })
}

/// Publication time from the item title.
///
/// A title that matches but whose date text is malformed yields `None`.
pub fn published_at(title: &str) -> Option<DateTime<FixedOffset>> {
    let raw = PUBLISHED_AT.captures(title)?.get(1)?.as_str();
    match DateTime::parse_from_rfc2822(raw) {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!(raw, error = %e, "Malformed AQHI timestamp");
            None
        }
    }
}

fn index_range(re: &Regex, description: &str) -> IndexRange {
    let Some(caps) = re.captures(description) else {
        return IndexRange::default();
    };
    let parse = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
    IndexRange {
        from: parse(1),
        to: parse(2),
    }
}

/// Station ranges from description text.
pub fn station_ranges(description: &str) -> (IndexRange, IndexRange) {
    (
        index_range(&GENERAL, description),
        index_range(&ROADSIDE, description),
    )
}
