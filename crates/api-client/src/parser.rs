// In crates/api-client/src/parser.rs

use crate::types::{DailySeriesResponse, RawDailyBar};
use crate::{Error, Result};
use chrono::NaiveDate;
use core_types::{PricePoint, PriceSeries};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns a raw `TIME_SERIES_DAILY` body into an ascending `PriceSeries`.
///
/// An empty time-series object is a valid, empty series. A body without a
/// time series is an error, classified by whichever message field Alpha
/// Vantage filled in.
pub fn parse_daily_series(body: &str) -> Result<PriceSeries> {
    let response: DailySeriesResponse = serde_json::from_str(body)?;

    if let Some(msg) = response.error_message {
        return Err(Error::ApiError(msg));
    }

    let Some(time_series) = response.time_series else {
        if let Some(msg) = response.note.or(response.information) {
            return Err(Error::Throttled(msg));
        }
        return Err(Error::MissingTimeSeries);
    };

    // The API lists the newest day first; keying by date restores ascending order.
    let mut by_date = BTreeMap::new();
    for (raw_date, bar) in time_series {
        let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
            .map_err(|e| Error::MalformedPayload(format!("bad date {raw_date:?}: {e}")))?;
        if by_date.insert(date, to_price_point(date, &bar)).is_some() {
            return Err(Error::MalformedPayload(format!(
                "duplicate entry for {date} (key {raw_date:?})"
            )));
        }
    }

    Ok(PriceSeries::new(by_date.into_values().collect())?)
}

fn to_price_point(date: NaiveDate, bar: &RawDailyBar) -> PricePoint {
    PricePoint {
        date,
        open: bar.open.as_ref().and_then(parse_decimal),
        high: bar.high.as_ref().and_then(parse_decimal),
        low: bar.low.as_ref().and_then(parse_decimal),
        close: bar.close.as_ref().and_then(parse_decimal),
        volume: bar.volume.as_ref().and_then(parse_decimal),
    }
}

/// Reads a numeric field; anything that is not a decimal number is missing.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
