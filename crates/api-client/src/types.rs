// In crates/api-client/src/types.rs

use app_config::types::OutputSize;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The client for the Alpha Vantage market-data API.
///
/// All configuration is carried by the value itself; nothing is shared
/// between instances.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    /// The persistent HTTP client.
    pub http_client: Client,
    /// The Alpha Vantage API key.
    pub api_key: String,
    /// The base URL, e.g. `https://www.alphavantage.co`.
    pub base_url: String,
    /// How much history to request.
    pub output_size: OutputSize,
}

/// The raw `TIME_SERIES_DAILY` response.
///
/// Alpha Vantage answers with HTTP 200 even on failure, putting the reason in
/// one of the message fields instead of the time series.
#[derive(Debug, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: Option<BTreeMap<String, RawDailyBar>>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    /// Rate-limit notice.
    #[serde(rename = "Note")]
    pub note: Option<String>,
    /// Premium-endpoint or daily-quota notice.
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

/// One daily bar as sent on the wire. Values are normally decimal strings but
/// are kept as raw JSON so that anything unexpected degrades to a missing
/// value rather than failing the whole payload.
#[derive(Debug, Deserialize, Clone)]
pub struct RawDailyBar {
    #[serde(rename = "1. open")]
    pub open: Option<Value>,
    #[serde(rename = "2. high")]
    pub high: Option<Value>,
    #[serde(rename = "3. low")]
    pub low: Option<Value>,
    #[serde(rename = "4. close")]
    pub close: Option<Value>,
    #[serde(rename = "5. volume")]
    pub volume: Option<Value>,
}
