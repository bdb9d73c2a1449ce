//! Feed fetching over a pluggable HTTP transport.
//!
//! The [`Transport`] trait is the seam between the pipeline and the network:
//! it performs one GET and reports the status code and body without judging
//! them. [`fetch`] layers the status check on top, so every source chain gets
//! the same "exactly one attempt, non-200 is an error" behaviour.
//!
//! [`HttpTransport`] is the production implementation on top of `reqwest`.
//! Tests substitute an in-memory transport keyed by URL.

use crate::config::FeedConfig;
use crate::error::SourceError;
use crate::utils::{redact_url, truncate_for_log};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Status, final URL and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

/// Something that can perform a single HTTP GET.
///
/// Implementations must not retry and must not inspect the status code;
/// network-level failures are reported as [`SourceError::Transport`].
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, SourceError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Build a client with the configured user agent and request timeout.
    pub fn from_config(config: &FeedConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::new(http))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, SourceError> {
        let transport_err = |e: reqwest::Error| SourceError::Transport {
            url: redact_url(url),
            source: Box::new(e.without_url()),
        };

        let res = self.http.get(url).send().await.map_err(transport_err)?;
        let status = res.status().as_u16();
        let final_url = res.url().to_string();
        let body = res.text().await.map_err(transport_err)?;

        Ok(RawResponse {
            status,
            url: final_url,
            body,
        })
    }
}

/// Perform one GET and return the body of a `200 OK` response.
///
/// # Errors
///
/// - [`SourceError::HttpStatus`] when the status is anything but 200
/// - [`SourceError::Transport`] propagated unchanged from the transport
#[instrument(level = "info", skip_all, fields(url = %redact_url(url)))]
pub async fn fetch<T: Transport>(transport: &T, url: &str) -> Result<String, SourceError> {
    let t0 = Instant::now();
    let res = transport.get(url).await?;
    let elapsed_ms = t0.elapsed().as_millis();

    if res.status != 200 {
        warn!(
            status = res.status,
            elapsed_ms,
            body_preview = %truncate_for_log(&res.body, 200),
            "Feed returned non-200 status"
        );
        return Err(SourceError::HttpStatus {
            status: res.status,
            url: redact_url(url),
        });
    }

    debug!(bytes = res.body.len(), elapsed_ms, "Fetched feed");
    Ok(res.body)
}
