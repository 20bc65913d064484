// In crates/strategies/src/ma_crossover.rs

use crate::sma;
use crate::types::{CrossoverAnalysis, MACrossoverSettings};
use crate::{Error, Result, Strategy};
use core_types::{AverageSeries, PriceSeries, SignalEvent, SignalKind};
use rust_decimal::Decimal;

/// Scans two aligned moving averages for crossovers.
///
/// A buy fires when the short average moves from at-or-below the long average
/// to strictly above it; a sell is the mirror image. Equality on the current
/// day never fires, while equality on the previous day counts as "not yet
/// crossed" for both directions. Any position where one of the four values is
/// undefined is skipped, which keeps the warm-up period silent.
pub fn detect(
    series: &PriceSeries,
    short_avg: &AverageSeries,
    long_avg: &AverageSeries,
) -> Result<Vec<SignalEvent>> {
    for avg in [short_avg, long_avg] {
        if avg.len() != series.len() {
            return Err(Error::MisalignedSeries {
                expected: series.len(),
                actual: avg.len(),
            });
        }
    }

    let points = series.points();
    let mut signals = Vec::new();

    for i in 1..points.len() {
        let (Some(short), Some(long), Some(last_short), Some(last_long)) = (
            short_avg.value_at(i),
            long_avg.value_at(i),
            short_avg.value_at(i - 1),
            long_avg.value_at(i - 1),
        ) else {
            continue;
        };

        let Some(kind) = crossover(short, long, last_short, last_long) else {
            continue;
        };

        // A defined average implies the close at `i` is present.
        if let Some(price) = points[i].close {
            signals.push(SignalEvent {
                date: points[i].date,
                price,
                kind,
            });
        }
    }

    Ok(signals)
}

fn crossover(
    short: Decimal,
    long: Decimal,
    last_short: Decimal,
    last_long: Decimal,
) -> Option<SignalKind> {
    if short > long && last_short <= last_long {
        // Bullish: fast line just crossed above the slow line.
        Some(SignalKind::Buy)
    } else if short < long && last_short >= last_long {
        // Bearish: fast line just crossed below the slow line.
        Some(SignalKind::Sell)
    } else {
        None
    }
}

/// The simple moving-average crossover strategy.
#[derive(Debug, Clone)]
pub struct MACrossover {
    /// The configuration for this strategy instance.
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` strategy instance from its settings.
    pub fn new(settings: MACrossoverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }
}

impl Strategy for MACrossover {
    fn name(&self) -> &'static str {
        "SmaCrossover"
    }

    fn evaluate(&self, series: &PriceSeries) -> Result<CrossoverAnalysis> {
        let (short_average, long_average) = sma::compute(
            series,
            self.settings.short_window as usize,
            self.settings.long_window as usize,
        )?;
        let signals = detect(series, &short_average, &long_average)?;

        Ok(CrossoverAnalysis {
            short_average,
            long_average,
            signals,
        })
    }
}
