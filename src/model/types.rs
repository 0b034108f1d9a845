use super::error::LsmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The outcome of a least-squares fit: `y = incline * x + shift`, with the
/// standard error of each parameter.
///
/// Only the estimator (or deserialization through [`crate::decode`]) builds one;
/// it is never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LsmDescription {
    incline: f64,
    shift: f64,
    incline_error: f64,
    shift_error: f64,
}

impl LsmDescription {
    pub(crate) fn new(incline: f64, shift: f64, incline_error: f64, shift_error: f64) -> Self {
        Self { incline, shift, incline_error, shift_error }
    }

    #[inline]
    pub fn incline(&self) -> f64 { self.incline }
    #[inline]
    pub fn shift(&self) -> f64 { self.shift }
    #[inline]
    pub fn incline_error(&self) -> f64 { self.incline_error }
    #[inline]
    pub fn shift_error(&self) -> f64 { self.shift_error }

    /// Evaluates the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.incline * x + self.shift
    }

    /// Evaluates the line with both parameters raised by one standard error.
    #[inline]
    pub fn predict_above(&self, x: f64) -> f64 {
        (self.incline + self.incline_error) * x + self.shift + self.shift_error
    }

    /// Evaluates the line with both parameters lowered by one standard error.
    #[inline]
    pub fn predict_under(&self, x: f64) -> f64 {
        (self.incline - self.incline_error) * x + self.shift - self.shift_error
    }
}

/// The measurements together with the fitted line and its one-sigma band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LsmLines {
    abscissa: Vec<f64>,
    ordinates: Vec<f64>,
    line_predicted: Vec<f64>,
    line_above: Vec<f64>,
    line_under: Vec<f64>,
}

impl LsmLines {
    /// Evaluates `description` at every abscissa value, preserving order.
    pub(crate) fn evaluate(abscissa: &[f64], ordinates: &[f64], description: &LsmDescription) -> Self {
        Self {
            abscissa: abscissa.to_vec(),
            ordinates: ordinates.to_vec(),
            line_predicted: abscissa.iter().map(|&x| description.predict(x)).collect(),
            line_above: abscissa.iter().map(|&x| description.predict_above(x)).collect(),
            line_under: abscissa.iter().map(|&x| description.predict_under(x)).collect(),
        }
    }

    pub fn abscissa(&self) -> &[f64] { &self.abscissa }
    pub fn ordinates(&self) -> &[f64] { &self.ordinates }
    pub fn line_predicted(&self) -> &[f64] { &self.line_predicted }
    pub fn line_above(&self) -> &[f64] { &self.line_above }
    pub fn line_under(&self) -> &[f64] { &self.line_under }
}

/// How to reconcile an abscissa and ordinates of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchStrategy {
    /// Reject any length mismatch.
    #[default]
    #[serde(alias = "fall")]
    Fail,
    /// Drop trailing elements of the longer sequence.
    #[serde(alias = "cut")]
    Truncate,
}

impl FromStr for MismatchStrategy {
    type Err = LsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "fall" => Ok(MismatchStrategy::Fail),
            "truncate" | "cut" => Ok(MismatchStrategy::Truncate),
            _ => Err(LsmError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for MismatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchStrategy::Fail => f.write_str("fail"),
            MismatchStrategy::Truncate => f.write_str("truncate"),
        }
    }
}
