// In crates/analytics/src/lib.rs

pub mod engine;
pub mod table;
pub mod types;

pub use engine::ReportBuilder;
pub use table::{format_price_preview, format_signal_table};
pub use types::{ChartReport, ChartRow, ReportSummary};
