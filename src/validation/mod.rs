//! Input checks run before any arithmetic.
pub mod mismatch;
pub mod validator;

pub use mismatch::resolve_mismatch;
pub use validator::{is_valid_measurements, validate_measurements, MIN_MEASUREMENTS};
