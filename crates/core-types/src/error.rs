// In crates/core-types/src/error.rs

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Price series is not strictly ascending: {previous} is followed by {next}")]
    UnorderedSeries { previous: NaiveDate, next: NaiveDate },
}

pub type Result<T> = std::result::Result<T, Error>;
