// In crates/api-client/src/lib.rs

use app_config::types::AlphaVantageSettings;
use async_trait::async_trait;
use core_types::{PriceSeries, Symbol};
use std::time::Duration;

pub mod error;
pub mod parser;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use parser::parse_daily_series;
pub use types::*;

/// The universal interface for a source of daily price history.
///
/// A provider returns `Ok` with a (possibly empty) ascending series on
/// success. Missing or malformed data is always an `Err`, never an empty
/// series.
#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    /// The name of the provider (e.g., "AlphaVantage").
    fn name(&self) -> &'static str;

    /// Fetches the daily OHLCV history for `symbol`, oldest day first.
    async fn daily_series(&self, symbol: &Symbol) -> Result<PriceSeries>;
}

impl AlphaVantageClient {
    /// Constructs a new client from `AlphaVantageSettings`.
    pub fn new(settings: &AlphaVantageSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::ClientBuildError(e.to_string()))?;

        Ok(AlphaVantageClient {
            http_client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            output_size: settings.output_size,
        })
    }

    /// Fetches the daily time series for a symbol.
    ///
    /// This corresponds to `GET /query?function=TIME_SERIES_DAILY`.
    pub async fn get_daily_series(&self, symbol: &Symbol) -> Result<PriceSeries> {
        let url = format!("{}/query", self.base_url);
        tracing::debug!(%symbol, output_size = self.output_size.as_str(), "Requesting daily time series");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol.as_str()),
                ("apikey", self.api_key.as_str()),
                ("outputsize", self.output_size.as_str()),
                ("datatype", "json"),
            ])
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::RequestFailed)?;
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let series = parse_daily_series(&body)?;
        tracing::info!(
            %symbol,
            points = series.len(),
            first = ?series.first_date(),
            last = ?series.last_date(),
            "Fetched daily price series"
        );

        Ok(series)
    }
}

#[async_trait]
impl PriceSeriesProvider for AlphaVantageClient {
    fn name(&self) -> &'static str {
        "AlphaVantage"
    }

    async fn daily_series(&self, symbol: &Symbol) -> Result<PriceSeries> {
        self.get_daily_series(symbol).await
    }
}

// Free function to allow api_client::new usage
pub fn new(settings: &AlphaVantageSettings) -> Result<AlphaVantageClient> {
    AlphaVantageClient::new(settings)
}
