//! Warning summary extractor.
//!
//! Each active warning is an item titled like
//! `Thunderstorm Warning (14:30 HKT 15/08/2023)`. The first item whose title
//! has that shape wins; the feed lists the most recent warning first. When no
//! warning is in force the feed carries a plain sentence instead, and both
//! report fields stay absent.

use crate::error::SourceError;
use crate::markup::select_texts;
use crate::models::Warning;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::Html;
use tracing::debug;

pub const TITLE_SELECTOR: &str = "item title";

/// Hong Kong Time, which the feed labels `HKT`.
const HKT_OFFSET_SECS: i32 = 8 * 3600;

static HEADLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*) \((\d\d):(\d\d) HKT (\d\d)/(\d\d)/(\d{4})\)")
        .expect("warning headline pattern is valid")
});

/// Extract the most recent warning headline from a parsed feed.
pub fn extract(document: &Html) -> Result<Warning, SourceError> {
    let titles = select_texts(document, TITLE_SELECTOR)?;
    let warning = titles
        .iter()
        .find_map(|title| parse_headline(title))
        .unwrap_or_else(|| {
            debug!(titles = titles.len(), "No warning headline matched");
            Warning::default()
        });
    Ok(warning)
}

/// Parse one item title. `None` when the title is not a warning headline.
///
/// A headline with an impossible date still yields its text.
pub fn parse_headline(title: &str) -> Option<Warning> {
    let caps = HEADLINE.captures(title)?;
    let text = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Some(Warning {
        effective_at: effective_at(&caps),
        text,
    })
}

fn effective_at(caps: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    let num = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    let (hour, minute) = (num(2)?, num(3)?);
    let (day, month, year) = (num(4)?, num(5)?, num(6)?);

    let naive = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?
        .and_hms_opt(hour, minute, 0)?;
    let hkt = FixedOffset::east_opt(HKT_OFFSET_SECS)?;
    hkt.from_local_datetime(&naive).single()
}
