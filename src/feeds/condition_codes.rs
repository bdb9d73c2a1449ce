//! Hong Kong Observatory weather icon codes.
//!
//! The current weather bulletin embeds an icon such as
//! `http://rss.weather.gov.hk/img/pic62.png`; the two digits in the filename
//! identify the condition. The table is built once and read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use url::Url;

const CODES: &[(u8, &str)] = &[
    (50, "Sunny"),
    (51, "Sunny Periods"),
    (52, "Sunny Intervals"),
    (53, "Sunny Periods with A Few Showers"),
    (54, "Sunny Intervals with Showers"),
    (60, "Cloudy"),
    (61, "Overcast"),
    (62, "Light Rain"),
    (63, "Rain"),
    (64, "Heavy Rain"),
    (65, "Thunderstorms"),
    // 70-75 are the same condition drawn with different moon phases.
    (70, "Fine"),
    (71, "Fine"),
    (72, "Fine"),
    (73, "Fine"),
    (74, "Fine"),
    (75, "Fine"),
    (76, "Mainly Cloudy"),
    (77, "Mainly Fine"),
    (80, "Windy"),
    (81, "Dry"),
    (82, "Humid"),
    (83, "Fog"),
    (84, "Mist"),
    (85, "Haze"),
    (90, "Hot"),
    (91, "Warm"),
    (92, "Cool"),
    (93, "Cold"),
];

static TABLE: Lazy<BTreeMap<u8, &'static str>> = Lazy::new(|| CODES.iter().copied().collect());

static ICON_FILE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\D*(\d{2})\.[A-Za-z]+$").expect("icon code pattern is valid"));

/// Caption for a condition code, if the code is known.
pub fn caption(code: u8) -> Option<&'static str> {
    TABLE.get(&code).copied()
}

/// Every known `(code, caption)` pair in ascending code order.
pub fn entries() -> impl Iterator<Item = (u8, &'static str)> {
    TABLE.iter().map(|(code, caption)| (*code, *caption))
}

/// Two-digit condition code from the final path segment of an icon URL.
///
/// Accepts absolute URLs and bare paths; query strings and fragments are
/// ignored. Returns `None` when the filename does not carry a code.
pub fn code_from_icon_url(icon_url: &str) -> Option<u8> {
    let path = match Url::parse(icon_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => icon_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    let file_name = path.rsplit('/').next()?;
    ICON_FILE_CODE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_code_round_trips_through_icon_url() {
        for (code, expected) in entries() {
            let url = format!("http://rss.weather.gov.hk/img/pic{code}.png");
            let parsed = code_from_icon_url(&url);
            assert_eq!(parsed, Some(code), "url: {url}");
            assert_eq!(caption(code), Some(expected));
        }
    }

    #[test]
    fn test_unknown_code_has_no_caption() {
        assert_eq!(code_from_icon_url("http://rss.weather.gov.hk/img/pic99.png"), Some(99));
        assert_eq!(caption(99), None);
    }

    #[test]
    fn test_code_only_read_from_final_segment() {
        let cases = [
            ("http://rss.weather.gov.hk/img/pic62.png", Some(62)),
            ("http://host/img/pic62.png?v=20", Some(62)),
            ("/img/pic51.gif", Some(51)),
            ("pic70.png", Some(70)),
            ("http://host/2023/08/icon.png", None),
            ("http://host/img/pic123.png", None),
            ("http://host/img/pic6.png", None),
            ("http://host/img/", None),
        ];
        for (url, expected) in cases {
            assert_eq!(code_from_icon_url(url), expected, "url: {url}");
        }
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert_eq!(entries().count(), CODES.len());
    }
}
