// In crates/analytics/src/table.rs

use crate::types::ChartReport;
use core_types::PriceSeries;
use rust_decimal::Decimal;
use std::fmt::Write;

const MISSING: &str = "-";

fn cell(value: Option<Decimal>) -> String {
    value
        .map(|v| v.round_dp(4).normalize().to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Renders the first `rows` records of a series as a fixed-width table.
pub fn format_price_preview(series: &PriceSeries, rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}",
        "date", "open", "high", "low", "close", "volume"
    );
    for point in series.iter().take(rows) {
        let _ = writeln!(
            out,
            "{:<10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}",
            point.date,
            cell(point.open),
            cell(point.high),
            cell(point.low),
            cell(point.close),
            cell(point.volume),
        );
    }
    out
}

/// Renders the crossover markers of a report, followed by a one-line summary.
pub fn format_signal_table(report: &ChartReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} SMA({}) / SMA({}) crossovers",
        report.symbol, report.short_window, report.long_window
    );

    if report.markers.is_empty() {
        let _ = writeln!(out, "  no crossovers");
    } else {
        let _ = writeln!(out, "  {:<10}  {:<4}  {:>12}", "date", "kind", "price");
        for marker in &report.markers {
            let _ = writeln!(
                out,
                "  {:<10}  {:<4}  {:>12}",
                marker.date,
                marker.kind.to_string(),
                cell(Some(marker.price)),
            );
        }
    }

    let summary = &report.summary;
    let _ = writeln!(
        out,
        "{} points, {} buy, {} sell",
        summary.total_points, summary.buy_signals, summary.sell_signals
    );
    out
}
