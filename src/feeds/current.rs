//! Current weather bulletin extractor.
//!
//! The bulletin is a block of prose inside the item description, one reading
//! per line:
//!
//! ```text
//! Air temperature : 29 degrees Celsius
//! Relative Humidity : 84 per cent
//! During the past hour the mean UV Index recorded at King's Park : 2.5
//! Intensity of UV radiation : moderate
//! ```
//!
//! Each reading has its own pattern, and a reading that does not match is
//! simply left absent. The bulletin icon is decoded into an
//! [`IconCondition`] via the condition code table.

use super::condition_codes;
use crate::error::SourceError;
use crate::markup::{select_attr, select_text};
use crate::models::{CurrentConditions, IconCondition};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::debug;

pub const BULLETIN_SELECTOR: &str = "description p";
pub const ICON_SELECTOR: &str = "description img";

static TEMPERATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r": (\d+) degrees Celsius").expect("temperature pattern is valid"));
static HUMIDITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Relative Humidity : (\d+) per cent").expect("humidity pattern is valid")
});
static UV_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UV Index [^\d]*(\d+(?:\.\d+)?)").expect("UV index pattern is valid"));
static UV_INTENSITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Intensity of UV radiation : ([^\r\n]*)").expect("UV intensity pattern is valid")
});

/// Extract readings and the icon condition from a parsed bulletin.
///
/// Only selector compilation can fail; pattern misses yield `None` fields.
pub fn extract(document: &Html) -> Result<CurrentConditions, SourceError> {
    let bulletin = select_text(document, BULLETIN_SELECTOR)?;
    let mut current = parse_bulletin(&bulletin);
    current.icon_condition = select_attr(document, ICON_SELECTOR, "src")?
        .map(|icon_url| icon_condition(&icon_url));
    Ok(current)
}

/// Apply the four reading patterns to bulletin text.
pub fn parse_bulletin(text: &str) -> CurrentConditions {
    let temperature_celsius = capture(&TEMPERATURE, text).and_then(|s| s.parse().ok());
    let humidity_percent = capture(&HUMIDITY, text).and_then(|s| s.parse().ok());
    let uv_index = capture(&UV_INDEX, text).and_then(|s| s.parse().ok());
    let uv_intensity = capture(&UV_INTENSITY, text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if temperature_celsius.is_none() {
        debug!("Temperature pattern did not match bulletin");
    }
    if humidity_percent.is_none() {
        debug!("Humidity pattern did not match bulletin");
    }

    CurrentConditions {
        temperature_celsius,
        humidity_percent,
        uv_index,
        uv_intensity,
        icon_condition: None,
    }
}

/// Decode an icon URL into a condition; unknown codes keep a `None` caption.
pub fn icon_condition(icon_url: &str) -> IconCondition {
    let code = condition_codes::code_from_icon_url(icon_url);
    IconCondition {
        code,
        caption: code
            .and_then(condition_codes::caption)
            .map(str::to_string),
        icon_url: icon_url.to_string(),
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
