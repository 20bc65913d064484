// In crates/analytics/src/types.rs

use chrono::{DateTime, NaiveDate, Utc};
use core_types::{SignalEvent, SignalKind, Symbol};
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the chart: the close and both averages on a given day, plus the
/// marker to draw there, if any. Undefined values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub close: Option<Decimal>,
    pub short_average: Option<Decimal>,
    pub long_average: Option<Decimal>,
    pub signal: Option<SignalKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ReportSummary {
    pub total_points: usize,
    pub defined_short: usize,
    pub defined_long: usize,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub last_signal: Option<SignalEvent>,
}

/// Everything an external renderer needs to draw the price chart with its
/// two moving averages and crossover markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub symbol: Symbol,
    pub short_window: usize,
    pub long_window: usize,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ChartRow>,
    pub markers: Vec<SignalEvent>,
    pub summary: ReportSummary,
}

impl ChartReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
