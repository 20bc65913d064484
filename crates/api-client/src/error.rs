// In crates/api-client/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to build the API client: {0}")]
    ClientBuildError(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Request throttled by the API: {0}")]
    Throttled(String),
    #[error("Response did not contain a daily time series")]
    MissingTimeSeries,
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Invalid price series: {0}")]
    InvalidSeries(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
