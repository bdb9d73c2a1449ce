//! Feed endpoints and HTTP settings.
//!
//! A [`FeedConfig`] can be built from defaults, loaded from a YAML file, or
//! both (any key missing from the file keeps its default). The library never
//! reads environment variables; the binary layers CLI overrides on top.
//!
//! ```yaml
//! current_weather_url: http://rss.weather.gov.hk/rss/CurrentWeather.xml
//! request_timeout_secs: 10
//! condition_api:
//!   location: Kowloon
//!   api_key: 0123456789abcdef
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_CURRENT_WEATHER_URL: &str = "http://rss.weather.gov.hk/rss/CurrentWeather.xml";
pub const DEFAULT_WARNING_URL: &str = "http://rss.weather.gov.hk/rss/WeatherWarningSummaryv2.xml";
pub const DEFAULT_AIR_QUALITY_URL: &str =
    "http://www.aqhi.gov.hk/epd/ddata/html/out/aqhirss_Eng.xml";
pub const DEFAULT_CONDITION_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Endpoints and HTTP settings for one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Current weather report feed (XML/RSS).
    pub current_weather_url: String,
    /// Warning summary feed (XML/RSS).
    pub warning_url: String,
    /// Air quality health index feed (XML/RSS).
    pub air_quality_url: String,
    /// External condition lookup (JSON).
    pub condition_api: ConditionApiConfig,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            current_weather_url: DEFAULT_CURRENT_WEATHER_URL.to_string(),
            warning_url: DEFAULT_WARNING_URL.to_string(),
            air_quality_url: DEFAULT_AIR_QUALITY_URL.to_string(),
            condition_api: ConditionApiConfig::default(),
            request_timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Query settings for the external condition API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionApiConfig {
    pub endpoint: String,
    pub location: String,
    pub units: String,
    /// Sent as `appid` when present.
    pub api_key: Option<String>,
}

impl Default for ConditionApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONDITION_ENDPOINT.to_string(),
            location: "Hong Kong".to_string(),
            units: "metric".to_string(),
            api_key: None,
        }
    }
}

impl ConditionApiConfig {
    /// Full request URL with location, units and optional key in the query string.
    pub fn url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.endpoint).map_err(|source| ConfigError::InvalidUrl {
            field: "condition_api.endpoint",
            source,
        })?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("q", &self.location)
                .append_pair("units", &self.units);
            if let Some(key) = self.api_key.as_deref() {
                query.append_pair("appid", key);
            }
        }
        Ok(url)
    }
}

impl FeedConfig {
    /// Load config from a YAML file. Missing keys keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Yaml { source, .. } => ConfigError::Yaml {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        info!("Loaded feed configuration");
        Ok(config)
    }

    /// Parse and validate config from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FeedConfig =
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every endpoint parses as a URL and the timeout is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("current_weather_url", &self.current_weather_url),
            ("warning_url", &self.warning_url),
            ("air_quality_url", &self.air_quality_url),
        ] {
            Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
        }
        self.condition_api.url()?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
