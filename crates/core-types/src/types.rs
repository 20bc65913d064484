// In crates/core-types/src/types.rs

use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticker symbol, e.g. "AAPL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Creates a symbol, normalizing it to upper case.
    pub fn new(ticker: impl AsRef<str>) -> Self {
        Self(ticker.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One daily OHLCV record.
///
/// Numeric fields are `None` when the upstream value was missing or could not
/// be parsed as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<Decimal>,
}

impl PricePoint {
    /// Builds a record where only the close is known. Handy for feeding the
    /// indicators from a plain list of closing prices.
    pub fn from_close(date: NaiveDate, close: Decimal) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close: Some(close),
            volume: None,
        }
    }
}

/// A chronologically ordered series of daily records for one ticker.
///
/// Dates are strictly increasing. The series cannot be mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Wraps `points`, rejecting any pair of neighbours whose dates are not
    /// strictly increasing.
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if let Some(pair) = points.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(Error::UnorderedSeries {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// The closing prices, position for position.
    pub fn closes(&self) -> impl Iterator<Item = Option<Decimal>> + '_ {
        self.points.iter().map(|p| p.close)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The value of a moving average at one position. `None` marks a position
/// where the average is not defined (warm-up, or a missing close in the window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AveragePoint {
    pub date: NaiveDate,
    pub value: Option<Decimal>,
}

/// A moving average aligned 1:1 by position with the series it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageSeries {
    pub window: usize,
    pub points: Vec<AveragePoint>,
}

impl AverageSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The value at `index`, or `None` if undefined or out of range.
    pub fn value_at(&self, index: usize) -> Option<Decimal> {
        self.points.get(index).and_then(|p| p.value)
    }

    /// Number of positions carrying a defined value.
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Buy => f.write_str("BUY"),
            SignalKind::Sell => f.write_str("SELL"),
        }
    }
}

/// A crossover between the short and long averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub date: NaiveDate,
    /// Closing price on the day of the crossover.
    pub price: Decimal,
    pub kind: SignalKind,
}
