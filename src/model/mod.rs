//! Value types shared by every stage of the fit.
pub mod error;
pub mod types;

pub use error::{ErrorKind, LsmError, Result};
pub use types::{LsmDescription, LsmLines, MismatchStrategy};
