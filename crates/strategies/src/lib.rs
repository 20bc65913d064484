// In crates/strategies/src/lib.rs

use core_types::PriceSeries;

pub mod error;
pub mod ma_crossover;
pub mod sma;
pub mod types;

pub use error::{Error, Result};
pub use ma_crossover::{MACrossover, detect};
pub use sma::{compute, simple_moving_average};
pub use types::{CrossoverAnalysis, MACrossoverSettings};

/// The universal interface for a signal strategy.
///
/// A strategy analyzes a complete, chronologically ordered price series and
/// derives its indicators and signal events in a single deterministic pass.
/// Evaluating the same series twice yields identical output.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn evaluate(&self, series: &PriceSeries) -> Result<CrossoverAnalysis>;
}
