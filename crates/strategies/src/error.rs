// In crates/strategies/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid moving-average window: {0} (must be a positive integer)")]
    InvalidWindow(usize),

    #[error("Average series of length {actual} does not align with price series of length {expected}")]
    MisalignedSeries { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
