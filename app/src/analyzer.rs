// In app/src/analyzer.rs

use analytics::{ChartReport, ReportBuilder};
use anyhow::{Context, Result};
use api_client::PriceSeriesProvider;
use core_types::{PriceSeries, Symbol};
use std::path::{Path, PathBuf};
use strategies::{MACrossover, MACrossoverSettings, Strategy};

/// Fetches the series for `symbol` and runs the crossover strategy over it.
pub async fn analyze(
    provider: &dyn PriceSeriesProvider,
    symbol: &Symbol,
    settings: &MACrossoverSettings,
) -> Result<ChartReport> {
    if !settings.is_conventional() {
        tracing::warn!(
            short_window = settings.short_window,
            long_window = settings.long_window,
            "Short window is not shorter than the long window; signals will not follow the usual trend reading."
        );
    }

    let series = fetch(provider, symbol).await?;

    let strategy = MACrossover::new(settings.clone());
    let analysis = strategy
        .evaluate(&series)
        .with_context(|| format!("{} failed for {}", strategy.name(), symbol))?;

    if analysis.long_average.defined_count() == 0 {
        tracing::warn!(
            %symbol,
            points = series.len(),
            long_window = settings.long_window,
            "Not enough data for the long average; no signals can be produced."
        );
    }

    let report = ReportBuilder::new().build(symbol, &series, &analysis);
    tracing::info!(
        %symbol,
        buys = report.summary.buy_signals,
        sells = report.summary.sell_signals,
        "Crossover analysis complete."
    );

    Ok(report)
}

/// Fetches the daily series for `symbol` through `provider`.
pub async fn fetch(provider: &dyn PriceSeriesProvider, symbol: &Symbol) -> Result<PriceSeries> {
    provider
        .daily_series(symbol)
        .await
        .with_context(|| format!("Failed to fetch daily prices for {} from {}", symbol, provider.name()))
}

/// Default location for a report: `<output_dir>/<SYMBOL>_sma_<short>_<long>.json`.
pub fn default_report_path(output_dir: &str, report: &ChartReport) -> PathBuf {
    Path::new(output_dir).join(format!(
        "{}_sma_{}_{}.json",
        report.symbol, report.short_window, report.long_window
    ))
}

/// Writes the report as pretty JSON, creating parent directories as needed.
pub fn write_report(path: &Path, report: &ChartReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = report.to_json().context("Failed to serialize chart report")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
