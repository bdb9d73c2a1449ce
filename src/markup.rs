//! Markup normalization and selector helpers.
//!
//! Feed bodies wrap their HTML payloads in CDATA sections, which the HTML
//! parser would treat as bogus comments. [`normalize`] unwraps them first and
//! then parses the result into a queryable [`Html`] tree.

use crate::error::SourceError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::borrow::Cow;

static CDATA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<!\[CDATA\[(.*?)\]\]>").expect("CDATA pattern is valid")
});

/// Replace every `<![CDATA[ ... ]]>` section with its inner text.
pub fn strip_cdata(body: &str) -> Cow<'_, str> {
    CDATA.replace_all(body, "$1")
}

/// Unwrap CDATA sections and parse the body into a document tree.
///
/// # Errors
///
/// [`SourceError::Parse`] when the body has no content to parse.
pub fn normalize(body: &str) -> Result<Html, SourceError> {
    if body.trim().is_empty() {
        return Err(SourceError::Parse("empty document".to_string()));
    }
    Ok(Html::parse_document(&strip_cdata(body)))
}

/// Compile a CSS selector, mapping failures to [`SourceError::Parse`].
pub fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(format!("bad selector {css:?}: {e}")))
}

/// Text of every node matching `css`, concatenated in document order.
pub fn select_text(document: &Html, css: &str) -> Result<String, SourceError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .flat_map(|element| element.text())
        .collect())
}

/// Text of each node matching `css`, one entry per match.
pub fn select_texts(document: &Html, css: &str) -> Result<Vec<String>, SourceError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect())
}

/// Value of `attr` on the first node matching `css` that carries it.
pub fn select_attr(document: &Html, css: &str, attr: &str) -> Result<Option<String>, SourceError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .find_map(|element| element.value().attr(attr))
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_cdata() {
        let cases = [
            ("<d><![CDATA[<p>hi</p>]]></d>", "<d><p>hi</p></d>"),
            ("<d><![cdata[lower]]></d>", "<d>lower</d>"),
            ("<![CDATA[a]]><![CDATA[b]]>", "ab"),
            ("<![CDATA[line one\nline two]]>", "line one\nline two"),
            ("<![CDATA[keeps ] brackets]]>", "keeps ] brackets"),
            ("no cdata here", "no cdata here"),
        ];
        for (input, expected) in cases {
            assert_eq!(strip_cdata(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_exposes_cdata_markup() {
        let body = r#"<rss><channel><item><title>T</title>
<description><![CDATA[<p>Air temperature : 27 degrees Celsius</p>]]></description>
</item></channel></rss>"#;
        let document = normalize(body).unwrap();
        assert_eq!(
            select_text(&document, "description p").unwrap(),
            "Air temperature : 27 degrees Celsius"
        );
        assert_eq!(select_text(&document, "item title").unwrap(), "T");
    }

    #[test]
    fn test_normalize_rejects_empty_body() {
        assert!(matches!(normalize("  \n "), Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_select_texts_and_attr() {
        let document = normalize(
            r#"<rss><item><title>first</title></item><item><title>second</title></item>
<description><img src="http://example.com/img/pic50.png"></description></rss>"#,
        )
        .unwrap();
        assert_eq!(
            select_texts(&document, "item title").unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
        assert_eq!(
            select_attr(&document, "description img", "src").unwrap().as_deref(),
            Some("http://example.com/img/pic50.png")
        );
        assert_eq!(select_attr(&document, "description img", "alt").unwrap(), None);
    }

    #[test]
    fn test_bad_selector_is_parse_error() {
        let document = normalize("<p>x</p>").unwrap();
        assert!(matches!(select_text(&document, "p[["), Err(SourceError::Parse(_))));
    }
}
