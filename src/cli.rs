//! Command-line interface definitions for hk_weather.
//!
//! Every option can be given as a flag; the API key can also come from the
//! environment. Options given here override the config file.

use clap::{Parser, ValueEnum};
use hk_weather::FeedConfig;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The full report as JSON.
    Json,
    /// A short human-readable summary.
    Summary,
}

/// Command-line arguments for hk_weather.
///
/// # Examples
///
/// ```sh
/// # Print the report as JSON
/// hk_weather
///
/// # Write pretty JSON to a file, using a config file
/// hk_weather -c ./hk_weather.yaml -o ./out/report.json --pretty
///
/// # Human-readable summary with an API key from the environment
/// OPENWEATHER_API_KEY=... hk_weather -f summary
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Location queried on the condition API
    #[arg(long)]
    pub location: Option<String>,

    /// OpenWeatherMap API key for the condition lookup
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, mut config: FeedConfig) -> FeedConfig {
        if let Some(location) = &self.location {
            config.condition_api.location = location.clone();
        }
        if let Some(key) = &self.openweather_api_key {
            config.condition_api.api_key = Some(key.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hk_weather"]);

        assert_eq!(cli.config, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, Format::Json);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "hk_weather",
            "-c",
            "/etc/hk_weather.yaml",
            "-o",
            "/tmp/report.json",
            "-f",
            "summary",
        ]);

        assert_eq!(cli.config.as_deref(), Some("/etc/hk_weather.yaml"));
        assert_eq!(cli.output.as_deref(), Some("/tmp/report.json"));
        assert_eq!(cli.format, Format::Summary);
    }

    #[test]
    fn test_overrides_win_over_config() {
        let cli = Cli::parse_from([
            "hk_weather",
            "--location",
            "Sha Tin",
            "--openweather-api-key",
            "KEY",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.apply_overrides(FeedConfig::default());

        assert_eq!(config.condition_api.location, "Sha Tin");
        assert_eq!(config.condition_api.api_key.as_deref(), Some("KEY"));
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.warning_url, FeedConfig::default().warning_url);
    }
}
