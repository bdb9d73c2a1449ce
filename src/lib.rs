//! # hk_weather
//!
//! Fetches the Hong Kong Observatory current weather and warning feeds, the
//! EPD air quality feed and an external condition API, extracts their fields
//! with text patterns, and merges them into one [`WeatherReport`].
//!
//! ## Architecture
//!
//! 1. **Fetching**: one GET per source through a [`Transport`], no retries
//! 2. **Normalizing**: CDATA sections unwrapped, markup parsed into a tree
//! 3. **Extracting**: per-source patterns fill that source's report slice
//! 4. **Aggregating**: all sources run concurrently; failures are recorded,
//!    never propagated
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use hk_weather::{FeedConfig, WeatherScraper};
//!
//! let scraper = WeatherScraper::from_config(&FeedConfig::default())?;
//! let report = scraper.get_weather().await;
//! println!("{:?}", report.current.temperature_celsius);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod feeds;
pub mod fetch;
pub mod markup;
pub mod models;
pub mod outputs;
pub mod utils;

pub use aggregator::{FeedUrls, WeatherScraper};
pub use config::FeedConfig;
pub use error::{ConfigError, SourceError};
pub use fetch::{HttpTransport, RawResponse, Transport};
pub use models::{Source, SourceFailure, WeatherReport};
