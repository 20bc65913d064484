// In crates/strategies/src/sma.rs

use crate::{Error, Result};
use core_types::{AveragePoint, AverageSeries, PriceSeries};
use rust_decimal::Decimal;

/// Computes the short- and long-window simple moving averages of the closing
/// prices in `series`.
///
/// Both windows are validated before anything is computed, so an invalid
/// window never yields partial output. The calculator does not require
/// `window_short < window_long`; that ordering is the caller's concern.
pub fn compute(
    series: &PriceSeries,
    window_short: usize,
    window_long: usize,
) -> Result<(AverageSeries, AverageSeries)> {
    validate_window(window_short)?;
    validate_window(window_long)?;

    let short = simple_moving_average(series, window_short)?;
    let long = simple_moving_average(series, window_long)?;
    Ok((short, long))
}

/// Computes one simple moving average over the closing prices.
///
/// The value at position `i` is defined only when `i >= window - 1` and every
/// close in `[i - window + 1, i]` is present. A window longer than the series
/// is not an error: every position is simply undefined.
pub fn simple_moving_average(series: &PriceSeries, window: usize) -> Result<AverageSeries> {
    validate_window(window)?;

    let closes: Vec<Option<Decimal>> = series.closes().collect();
    let divisor = Decimal::from(window);

    // Rolling state over the current window: the sum of the present closes and
    // how many closes in the window are missing. `sum` is `None` once an
    // addition or subtraction has overflowed; it is rebuilt from the window
    // the next time a value is needed.
    let mut sum = Some(Decimal::ZERO);
    let mut missing = 0usize;
    let mut points = Vec::with_capacity(closes.len());

    for (i, point) in series.iter().enumerate() {
        match closes[i] {
            Some(close) => sum = sum.and_then(|s| s.checked_add(close)),
            None => missing += 1,
        }

        if i >= window {
            match closes[i - window] {
                Some(close) => sum = sum.and_then(|s| s.checked_sub(close)),
                None => missing -= 1,
            }
        }

        let full = i + 1 >= window;
        let value = if full && missing == 0 {
            if sum.is_none() {
                sum = window_sum(&closes[i + 1 - window..=i]);
            }
            // Still `None` when the window's true sum exceeds `Decimal`'s range.
            sum.and_then(|s| s.checked_div(divisor))
        } else {
            None
        };

        points.push(AveragePoint {
            date: point.date,
            value,
        });
    }

    Ok(AverageSeries { window, points })
}

fn window_sum(closes: &[Option<Decimal>]) -> Option<Decimal> {
    closes
        .iter()
        .try_fold(Decimal::ZERO, |acc, close| acc.checked_add((*close)?))
}

fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(Error::InvalidWindow(window));
    }
    Ok(())
}
