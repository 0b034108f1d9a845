//! The least-squares estimator and the lines derived from its result.
pub mod lines;
pub mod ols;

pub use lines::get_lsm_lines;
pub use ols::{get_lsm_description, Estimator};
