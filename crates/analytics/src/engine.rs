// In crates/analytics/src/engine.rs

use crate::types::{ChartReport, ChartRow, ReportSummary};
use chrono::Utc;
use core_types::{PriceSeries, SignalKind, Symbol};
use std::collections::HashMap;
use strategies::CrossoverAnalysis;

/// Assembles chart reports from a price series and its crossover analysis.
#[derive(Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the series, both averages and the signal markers row by row.
    ///
    /// The averages are aligned with `series` by position, so row `i` takes
    /// position `i` of each.
    pub fn build(
        &self,
        symbol: &Symbol,
        series: &PriceSeries,
        analysis: &CrossoverAnalysis,
    ) -> ChartReport {
        let markers_by_date: HashMap<_, _> = analysis
            .signals
            .iter()
            .map(|s| (s.date, s.kind))
            .collect();

        let rows = series
            .iter()
            .enumerate()
            .map(|(i, point)| ChartRow {
                date: point.date,
                close: point.close,
                short_average: analysis.short_average.value_at(i),
                long_average: analysis.long_average.value_at(i),
                signal: markers_by_date.get(&point.date).copied(),
            })
            .collect();

        ChartReport {
            symbol: symbol.clone(),
            short_window: analysis.short_average.window,
            long_window: analysis.long_average.window,
            generated_at: Utc::now(),
            rows,
            markers: analysis.signals.clone(),
            summary: self.summarize(series, analysis),
        }
    }

    fn summarize(&self, series: &PriceSeries, analysis: &CrossoverAnalysis) -> ReportSummary {
        let count = |kind| analysis.signals.iter().filter(|s| s.kind == kind).count();

        ReportSummary {
            total_points: series.len(),
            defined_short: analysis.short_average.defined_count(),
            defined_long: analysis.long_average.defined_count(),
            buy_signals: count(SignalKind::Buy),
            sell_signals: count(SignalKind::Sell),
            last_signal: analysis.signals.last().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use core_types::PricePoint;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use strategies::{MACrossover, MACrossoverSettings, Strategy};

    fn step_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let closes: Vec<Decimal> = [10, 10, 10, 10, 10, 20, 20, 20]
            .into_iter()
            .map(Decimal::from)
            .collect();
        PriceSeries::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, c)| PricePoint::from_close(start + Days::new(i as u64), *c))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn rows_line_up_with_the_series_and_markers() {
        let series = step_series();
        let analysis = MACrossover::new(MACrossoverSettings::new(2, 4))
            .evaluate(&series)
            .unwrap();
        let report = ReportBuilder::new().build(&Symbol::new("ibm"), &series, &analysis);

        assert_eq!(report.rows.len(), series.len());
        assert_eq!(report.short_window, 2);
        assert_eq!(report.long_window, 4);
        assert_eq!(report.rows[0].short_average, None);
        assert_eq!(report.rows[3].long_average, Some(dec!(10)));

        let marked: Vec<_> = report
            .rows
            .iter()
            .filter_map(|r| r.signal.map(|k| (r.date, k)))
            .collect();
        assert_eq!(marked, vec![(series.points()[5].date, SignalKind::Buy)]);

        assert_eq!(report.summary.total_points, 8);
        assert_eq!(report.summary.defined_short, 7);
        assert_eq!(report.summary.defined_long, 5);
        assert_eq!(report.summary.buy_signals, 1);
        assert_eq!(report.summary.sell_signals, 0);
        assert_eq!(report.summary.last_signal, analysis.signals.last().copied());
    }

    #[test]
    fn undefined_values_serialize_as_null() {
        let series = step_series();
        let analysis = MACrossover::new(MACrossoverSettings::new(2, 4))
            .evaluate(&series)
            .unwrap();
        let report = ReportBuilder::new().build(&Symbol::new("IBM"), &series, &analysis);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(json["rows"][0]["short_average"].is_null());
        assert_eq!(json["markers"][0]["kind"], "buy");
        assert_eq!(json["symbol"], "IBM");
    }

    #[test]
    fn empty_series_gives_an_empty_report() {
        let series = PriceSeries::default();
        let analysis = MACrossover::new(MACrossoverSettings::new(2, 4))
            .evaluate(&series)
            .unwrap();
        let report = ReportBuilder::new().build(&Symbol::new("IBM"), &series, &analysis);

        assert!(report.rows.is_empty());
        assert!(report.markers.is_empty());
        assert_eq!(report.summary, ReportSummary::default());
    }
}
