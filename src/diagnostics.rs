//! Diagnostic events emitted while validating and fitting measurements.
//!
//! The estimator never logs directly; it hands a [`FitEvent`] to whatever
//! [`EventSink`] it was built with. [`LogSink`] forwards to the `log` facade,
//! [`NullSink`] discards everything.

use crate::model::MismatchStrategy;
use std::fmt;
use std::path::PathBuf;

/// Logging target used by [`LogSink`].
pub const LOG_TARGET: &str = "lsm_core";

#[derive(Debug, Clone, PartialEq)]
pub enum FitEvent {
    /// A measurement sequence failed validation.
    RejectedMeasurements { what: &'static str, len: usize, reason: String },
    /// Lengths differed and the active strategy refused to reconcile them.
    MismatchRejected { abscissa: usize, ordinates: usize, strategy: MismatchStrategy },
    /// Lengths differed and the longer sequence was cut.
    Truncated { what: &'static str, from: usize, to: usize },
    /// The abscissa carried no spread, so no line can be fitted.
    DegenerateAbscissa { len: usize },
    /// A fit completed.
    Fitted { points: usize },
    /// A report was written to disk.
    ReportSaved { path: PathBuf },
}

impl FitEvent {
    pub fn level(&self) -> log::Level {
        match self {
            FitEvent::RejectedMeasurements { .. }
            | FitEvent::MismatchRejected { .. }
            | FitEvent::DegenerateAbscissa { .. } => log::Level::Error,
            FitEvent::Truncated { .. } => log::Level::Warn,
            FitEvent::ReportSaved { .. } => log::Level::Info,
            FitEvent::Fitted { .. } => log::Level::Debug,
        }
    }
}

impl fmt::Display for FitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitEvent::RejectedMeasurements { what, len, reason } => {
                write!(f, "rejected {} ({} values): {}", what, len, reason)
            }
            FitEvent::MismatchRejected { abscissa, ordinates, strategy } => write!(
                f,
                "length mismatch under '{}' strategy: {} abscissa values vs {} ordinates",
                strategy, abscissa, ordinates
            ),
            FitEvent::Truncated { what, from, to } => {
                write!(f, "truncated {} from {} to {} values", what, from, to)
            }
            FitEvent::DegenerateAbscissa { len } => {
                write!(f, "all {} abscissa values are identical", len)
            }
            FitEvent::Fitted { points } => write!(f, "fitted line over {} points", points),
            FitEvent::ReportSaved { path } => write!(f, "report saved to {}", path.display()),
        }
    }
}

/// Receives diagnostic events. Implementations must not fail or panic.
pub trait EventSink {
    fn record(&self, event: &FitEvent);
}

/// Forwards events to the `log` facade at the event's own level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &FitEvent) {
        log::log!(target: LOG_TARGET, event.level(), "{}", event);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &FitEvent) {}
}

/// Collects events in memory so tests can assert on what was reported.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub events: std::cell::RefCell<Vec<FitEvent>>,
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn record(&self, event: &FitEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
