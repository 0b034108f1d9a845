//! Human-readable rendering of fit results.
pub mod report;

pub use report::{get_report, ReportConfig, Reporter};
