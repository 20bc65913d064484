// In crates/app-config/src/types.rs

use serde::Deserialize;

pub use strategies::types::MACrossoverSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the Alpha Vantage API.
    pub alpha_vantage: AlphaVantageSettings,
    /// The moving-average windows.
    #[serde(default)]
    pub strategy: MACrossoverSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AlphaVantageSettings {
    /// The API key sent with every request.
    pub api_key: String,
    /// The REST base URL, without the `/query` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub output_size: OutputSize,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// How much history `TIME_SERIES_DAILY` returns.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// The latest 100 trading days.
    #[default]
    Compact,
    /// The full available history.
    Full,
}

impl OutputSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReportSettings {
    /// Where chart reports are written when no explicit path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// How many rows the price preview prints.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            preview_rows: default_preview_rows(),
        }
    }
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".into() }
fn default_log_level() -> String { "info".into() }
fn default_base_url() -> String { "https://www.alphavantage.co".into() }
fn default_timeout_secs() -> u64 { 30 }
fn default_output_dir() -> String { "reports".into() }
fn default_preview_rows() -> usize { 5 }
