// In crates/strategies/src/types.rs

use core_types::{AverageSeries, SignalEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MACrossoverSettings {
    /// Number of closes in the fast (short) average.
    #[serde(default = "default_short_window")]
    pub short_window: u32,
    /// Number of closes in the slow (long) average.
    #[serde(default = "default_long_window")]
    pub long_window: u32,
}

impl MACrossoverSettings {
    pub fn new(short_window: u32, long_window: u32) -> Self {
        Self {
            short_window,
            long_window,
        }
    }

    /// Whether the windows follow the usual trend-following layout
    /// (short strictly shorter than long).
    pub fn is_conventional(&self) -> bool {
        self.short_window < self.long_window
    }
}

impl Default for MACrossoverSettings {
    fn default() -> Self {
        Self::new(default_short_window(), default_long_window())
    }
}

fn default_short_window() -> u32 { 20 }
fn default_long_window() -> u32 { 50 }

/// Everything a crossover run derives from one price series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossoverAnalysis {
    pub short_average: AverageSeries,
    pub long_average: AverageSeries,
    /// Crossover events in ascending date order.
    pub signals: Vec<SignalEvent>,
}
