//! Ordinary least-squares line fitting with parameter uncertainties.
//!
//! Pipeline: [`validation`] checks the measurements and reconciles lengths,
//! [`estimation`] computes the fit and its one-sigma band, [`display`] renders
//! a text report. Diagnostics go to an injected [`diagnostics::EventSink`].
//!
//! With the `python` feature the same entry points are exported as the
//! `_core` Python extension module.

pub mod bindings;
pub mod decode;
pub mod diagnostics;
pub mod display;
pub mod estimation;
pub mod model;
pub mod validation;

pub use diagnostics::{EventSink, FitEvent, LogSink, NullSink};
pub use display::{get_report, ReportConfig, Reporter};
pub use estimation::{get_lsm_description, get_lsm_lines, Estimator};
pub use model::{ErrorKind, LsmDescription, LsmError, LsmLines, MismatchStrategy, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    bindings::python::register(m)
}
