//! Python surface of the crate: `get_lsm_description`, `get_lsm_lines`,
//! `get_report`, plus the `LSMDescription`, `LSMLines` and `MismatchStrategies`
//! classes.
//!
//! Python hands us arbitrary objects, so this is the one place the type-kind
//! errors of the core are produced for real.
use crate::diagnostics::LogSink;
use crate::display::{ReportConfig, Reporter, report::DEFAULT_PRECISION};
use crate::estimation::Estimator;
use crate::model::{ErrorKind, LsmDescription, LsmError, LsmLines, MismatchStrategy};
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyTypeError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use std::path::Path;

fn to_py_err(e: LsmError) -> PyErr {
    let msg = e.to_string();
    match e.kind() {
        ErrorKind::Type => PyTypeError::new_err(msg),
        ErrorKind::Value => PyValueError::new_err(msg),
        ErrorKind::Policy => PyRuntimeError::new_err(msg),
        ErrorKind::Numeric => PyZeroDivisionError::new_err(msg),
        ErrorKind::Io => PyIOError::new_err(msg),
    }
}

#[pyclass(name = "MismatchStrategies", eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyMismatchStrategy {
    #[pyo3(name = "FALL")]
    Fail,
    #[pyo3(name = "CUT")]
    Truncate,
}

impl From<PyMismatchStrategy> for MismatchStrategy {
    fn from(s: PyMismatchStrategy) -> Self {
        match s {
            PyMismatchStrategy::Fail => MismatchStrategy::Fail,
            PyMismatchStrategy::Truncate => MismatchStrategy::Truncate,
        }
    }
}

#[pyclass(name = "LSMDescription", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyLsmDescription {
    inner: LsmDescription,
}

#[pymethods]
impl PyLsmDescription {
    #[getter]
    fn incline(&self) -> f64 { self.inner.incline() }
    #[getter]
    fn shift(&self) -> f64 { self.inner.shift() }
    #[getter]
    fn incline_error(&self) -> f64 { self.inner.incline_error() }
    #[getter]
    fn shift_error(&self) -> f64 { self.inner.shift_error() }

    fn __repr__(&self) -> String {
        format!(
            "LSMDescription(incline={:?}, shift={:?}, incline_error={:?}, shift_error={:?})",
            self.inner.incline(),
            self.inner.shift(),
            self.inner.incline_error(),
            self.inner.shift_error()
        )
    }
}

#[pyclass(name = "LSMLines", frozen)]
#[derive(Debug, Clone)]
pub struct PyLsmLines {
    inner: LsmLines,
}

#[pymethods]
impl PyLsmLines {
    #[getter]
    fn abscissa(&self) -> Vec<f64> { self.inner.abscissa().to_vec() }
    #[getter]
    fn ordinates(&self) -> Vec<f64> { self.inner.ordinates().to_vec() }
    #[getter]
    fn line_predicted(&self) -> Vec<f64> { self.inner.line_predicted().to_vec() }
    #[getter]
    fn line_above(&self) -> Vec<f64> { self.inner.line_above().to_vec() }
    #[getter]
    fn line_under(&self) -> Vec<f64> { self.inner.line_under().to_vec() }
}

/// Type phase: the object must be iterable. Any iterable is accepted, as
/// `list(obj)` would.
fn sequence_items<'py>(what: &'static str, obj: &Bound<'py, PyAny>) -> Result<Vec<Bound<'py, PyAny>>, LsmError> {
    obj.try_iter()
        .and_then(|iter| iter.collect::<PyResult<Vec<_>>>())
        .map_err(|_| LsmError::NotASequence { what })
}

/// Value phase: every item must convert to a float.
fn to_measurements(what: &'static str, items: &[Bound<'_, PyAny>]) -> Result<Vec<f64>, LsmError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.extract::<f64>().map_err(|_| LsmError::NonRealMeasurement { what, index }))
        .collect()
}

fn extract_pair(abscissa: &Bound<'_, PyAny>, ordinates: &Bound<'_, PyAny>) -> Result<(Vec<f64>, Vec<f64>), LsmError> {
    let x_items = sequence_items("abscissa", abscissa)?;
    let y_items = sequence_items("ordinates", ordinates)?;
    Ok((to_measurements("abscissa", &x_items)?, to_measurements("ordinates", &y_items)?))
}

fn extract_strategy(obj: Option<&Bound<'_, PyAny>>) -> Result<MismatchStrategy, LsmError> {
    let Some(obj) = obj else {
        return Ok(MismatchStrategy::default());
    };
    if let Ok(s) = obj.extract::<PyRef<'_, PyMismatchStrategy>>() {
        return Ok((*s).into());
    }
    match obj.extract::<String>() {
        Ok(text) => text.parse(),
        Err(_) => Err(LsmError::UnknownStrategy(obj.to_string())),
    }
}

fn extract_description(obj: &Bound<'_, PyAny>) -> Result<LsmDescription, LsmError> {
    obj.extract::<PyRef<'_, PyLsmDescription>>()
        .map(|d| d.inner)
        .map_err(|_| LsmError::NotADescription {
            reason: format!("got an object of type '{}'", type_name(obj)),
        })
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type().name().map(|n| n.to_string()).unwrap_or_else(|_| "<unknown>".to_string())
}

/// Fits a line to the measurements.
///
/// `mismatch_strategy` may be a `MismatchStrategies` member or its name
/// (`"fall"`/`"fail"`, `"cut"`/`"truncate"`); it defaults to failing.
#[pyfunction]
#[pyo3(signature = (abscissa, ordinates, mismatch_strategy = None))]
pub fn get_lsm_description(
    abscissa: &Bound<'_, PyAny>,
    ordinates: &Bound<'_, PyAny>,
    mismatch_strategy: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyLsmDescription> {
    let (x, y) = extract_pair(abscissa, ordinates).map_err(to_py_err)?;
    let strategy = extract_strategy(mismatch_strategy).map_err(to_py_err)?;
    let inner = Estimator::new(&LogSink).describe(&x, &y, strategy).map_err(to_py_err)?;
    Ok(PyLsmDescription { inner })
}

#[pyfunction]
#[pyo3(signature = (abscissa, ordinates, lsm_description = None))]
pub fn get_lsm_lines(
    abscissa: &Bound<'_, PyAny>,
    ordinates: &Bound<'_, PyAny>,
    lsm_description: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyLsmLines> {
    let description = lsm_description.map(extract_description).transpose().map_err(to_py_err)?;
    let (x, y) = extract_pair(abscissa, ordinates).map_err(to_py_err)?;
    let inner = Estimator::new(&LogSink)
        .lines(&x, &y, description.as_ref())
        .map_err(to_py_err)?;
    Ok(PyLsmLines { inner })
}

/// Renders the report; a non-empty `path_to_save` also writes it to disk.
#[pyfunction]
#[pyo3(signature = (lsm_description, path_to_save = "", precision = DEFAULT_PRECISION))]
pub fn get_report(lsm_description: &Bound<'_, PyAny>, path_to_save: &str, precision: usize) -> PyResult<String> {
    let description = extract_description(lsm_description).map_err(to_py_err)?;
    Reporter::new(ReportConfig { precision }, &LogSink)
        .report(&description, Some(Path::new(path_to_save)))
        .map_err(to_py_err)
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMismatchStrategy>()?;
    m.add_class::<PyLsmDescription>()?;
    m.add_class::<PyLsmLines>()?;
    m.add_function(wrap_pyfunction!(get_lsm_description, m)?)?;
    m.add_function(wrap_pyfunction!(get_lsm_lines, m)?)?;
    m.add_function(wrap_pyfunction!(get_report, m)?)?;
    Ok(())
}
