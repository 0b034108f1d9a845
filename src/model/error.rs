//! Defines the error type returned by every fallible operation in the crate.
use std::path::PathBuf;
use thiserror::Error;

/// The category of a failure.
///
// Lets callers (and the Python bridge) branch on the failure class without
// matching on individual variants or message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was not a sequence of numbers, or not a fit description.
    Type,
    /// The input had the right shape but unacceptable contents.
    Value,
    /// The mismatch policy rejected the input.
    Policy,
    /// The fit is mathematically undefined for this input.
    Numeric,
    /// The report could not be persisted.
    Io,
}

#[derive(Error, Debug)]
pub enum LsmError {
    #[error("{what} is not a sequence of numbers")]
    NotASequence { what: &'static str },
    #[error("expected a fit description: {reason}")]
    NotADescription { reason: String },
    #[error("{what} must contain more than two measurements, got {len}")]
    TooFewMeasurements { what: &'static str, len: usize },
    #[error("{what}[{index}] is not a finite real number")]
    NonRealMeasurement { what: &'static str, index: usize },
    #[error("unknown mismatch strategy '{0}'")]
    UnknownStrategy(String),
    #[error("length mismatch: {abscissa} abscissa values vs {ordinates} ordinates")]
    LengthMismatch { abscissa: usize, ordinates: usize },
    #[error("fit is numerically undefined: {0}")]
    NumericDomain(&'static str),
    #[error("failed to write report to '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LsmError::NotASequence { .. } | LsmError::NotADescription { .. } => ErrorKind::Type,
            LsmError::TooFewMeasurements { .. }
            | LsmError::NonRealMeasurement { .. }
            | LsmError::UnknownStrategy(_) => ErrorKind::Value,
            LsmError::LengthMismatch { .. } => ErrorKind::Policy,
            LsmError::NumericDomain(_) => ErrorKind::Numeric,
            LsmError::Io { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, LsmError>;
