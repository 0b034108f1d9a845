//! Checks that a measurement sequence can take part in a fit.
use crate::model::{LsmError, Result};

/// Fewest points for which the residual variance (divided by `n - 2`) exists.
pub const MIN_MEASUREMENTS: usize = 3;

/// Returns `true` when every value is a finite real number and there are
/// more than two of them.
pub fn is_valid_measurements(measurements: &[f64]) -> bool {
    validate_measurements("measurements", measurements).is_ok()
}

/// Like [`is_valid_measurements`], but reports which check failed.
///
/// `what` names the sequence in the error (e.g. `"abscissa"`).
pub fn validate_measurements(what: &'static str, measurements: &[f64]) -> Result<()> {
    if let Some(index) = measurements.iter().position(|v| !v.is_finite()) {
        return Err(LsmError::NonRealMeasurement { what, index });
    }
    if measurements.len() < MIN_MEASUREMENTS {
        return Err(LsmError::TooFewMeasurements { what, len: measurements.len() });
    }
    Ok(())
}
