//! # hk_weather
//!
//! Runs one aggregation of the Hong Kong weather, warning, air quality and
//! condition feeds and prints the merged report.
//!
//! ## Usage
//!
//! ```sh
//! hk_weather --pretty
//! hk_weather -f summary
//! hk_weather -c hk_weather.yaml -o ./out/report.json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level), so stdout carries only
//! the report. A report is produced even when some sources fail.

use clap::Parser;
use hk_weather::outputs::{json, summary};
use hk_weather::utils::{ensure_writable_dir, parent_dir};
use hk_weather::{FeedConfig, WeatherScraper};
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Format};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hk_weather starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.output, ?args.format, "Parsed CLI arguments");

    // ---- Load config ----
    let config = match &args.config {
        Some(path) => FeedConfig::load(path)?,
        None => FeedConfig::default(),
    };
    let config = args.apply_overrides(config);

    let scraper = match WeatherScraper::from_config(&config) {
        Ok(scraper) => scraper,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    // ---- Aggregate ----
    let report = scraper.get_weather().await;

    // ---- Output ----
    match (args.format, &args.output) {
        (Format::Json, Some(path)) => json::write_report(&report, path, args.pretty).await?,
        (Format::Json, None) => println!("{}", json::to_json(&report, args.pretty)?),
        (Format::Summary, Some(path)) => {
            ensure_writable_dir(&parent_dir(path)).await?;
            tokio::fs::write(path, summary::render(&report)).await?;
            info!(%path, "Wrote summary");
        }
        (Format::Summary, None) => print!("{}", summary::render(&report)),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        failed_sources = report.failures.len(),
        "Execution complete"
    );

    Ok(())
}

