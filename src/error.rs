//! Error types for feed fetching, parsing and configuration.
//!
//! Every failure a single source chain can hit is a [`SourceError`]. These
//! never reach the caller of the aggregator; they are logged and recorded in
//! the report's failure list instead. A regex that does not match is not an
//! error at all, it just leaves the field absent.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of one source chain (fetch, normalize or extract).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("[{status}] {url}")]
    HttpStatus { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("missing data: {0}")]
    MissingData(String),
}

impl SourceError {
    /// Short machine-friendly name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::HttpStatus { .. } => "http_status",
            SourceError::Transport { .. } => "transport",
            SourceError::Parse(_) => "parse",
            SourceError::MissingData(_) => "missing_data",
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(format!("invalid JSON: {e}"))
    }
}

/// Failure while loading or validating a [`crate::config::FeedConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid URL for {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
