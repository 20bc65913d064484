// In app/src/main.rs

use anyhow::Result;
use app_config::Settings;
use clap::{Parser, Subcommand};
use core_types::Symbol;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod analyzer;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Fetches daily equity prices and reports simple moving-average crossovers."
)]
struct Cli {
    /// Overrides the configured log level (e.g., "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetches prices, computes both moving averages and reports crossovers.
    Analyze {
        /// The ticker symbol to analyze (e.g., "AAPL").
        #[arg(short, long)]
        symbol: String,

        /// Short moving-average window, in trading days.
        #[arg(long)]
        short: Option<u32>,

        /// Long moving-average window, in trading days.
        #[arg(long)]
        long: Option<u32>,

        /// Where to write the chart report JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetches prices and prints the oldest rows of the series.
    Fetch {
        /// The ticker symbol to fetch (e.g., "AAPL").
        #[arg(short, long)]
        symbol: String,

        /// Number of rows to print.
        #[arg(short, long)]
        rows: Option<usize>,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    let log_level = cli.log_level.as_deref().unwrap_or(&settings.app.log_level);
    init_tracing(log_level);

    tracing::info!(environment = %settings.app.environment, "Starting crossover");

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Analyze {
            symbol,
            short,
            long,
            output,
        } => {
            handle_analyze(&settings, symbol, short, long, output).await?;
        }
        Commands::Fetch { symbol, rows } => {
            handle_fetch(&settings, symbol, rows).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let (level, recognized) = match log_level.parse::<tracing::Level>() {
        Ok(level) => (level, true),
        Err(_) => (tracing::Level::INFO, false),
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(
        tracing_subscriber::filter::Targets::new()
            .with_target("reqwest", tracing::Level::WARN)
            .with_target("hyper", tracing::Level::WARN)
            .with_default(level),
    );
    tracing_subscriber::registry().with(fmt_layer).init();

    if !recognized {
        tracing::warn!(log_level, "Unrecognized log level; falling back to INFO.");
    }
}

// --- "Analyze" Subcommand Logic ---

async fn handle_analyze(
    settings: &Settings,
    symbol: String,
    short: Option<u32>,
    long: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let symbol = Symbol::new(symbol);

    let mut strategy_settings = settings.strategy.clone();
    if let Some(short) = short {
        strategy_settings.short_window = short;
    }
    if let Some(long) = long {
        strategy_settings.long_window = long;
    }

    let client = api_client::new(&settings.alpha_vantage)?;
    let report = analyzer::analyze(&client, &symbol, &strategy_settings).await?;

    print!("{}", analytics::format_signal_table(&report));

    let path = output.unwrap_or_else(|| {
        analyzer::default_report_path(&settings.report.output_dir, &report)
    });
    analyzer::write_report(&path, &report)?;
    tracing::info!(path = %path.display(), "Chart report written.");

    Ok(())
}

// --- "Fetch" Subcommand Logic ---

async fn handle_fetch(settings: &Settings, symbol: String, rows: Option<usize>) -> Result<()> {
    let symbol = Symbol::new(symbol);
    let client = api_client::new(&settings.alpha_vantage)?;

    let series = analyzer::fetch(&client, &symbol).await?;
    let rows = rows.unwrap_or(settings.report.preview_rows);

    print!("{}", analytics::format_price_preview(&series, rows));
    tracing::info!(%symbol, total = series.len(), shown = rows.min(series.len()), "Fetched price series.");

    Ok(())
}
