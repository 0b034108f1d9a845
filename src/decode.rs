//! Decoding of dynamically typed input (parsed JSON) into fit inputs.
//!
//! The typed API cannot be handed "something that is not a list"; data that
//! arrives deserialized can. This is where such input is rejected with a
//! type-kind error, before the validator's value checks run.
use crate::model::{LsmDescription, LsmError, Result};
use serde_json::Value;

/// Reads a JSON array of numbers.
///
/// A non-array is [`LsmError::NotASequence`]; an element that is not a
/// number is [`LsmError::NonRealMeasurement`]. Length is left to the validator.
pub fn measurements(what: &'static str, value: &Value) -> Result<Vec<f64>> {
    let items = value.as_array().ok_or(LsmError::NotASequence { what })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.as_f64().ok_or(LsmError::NonRealMeasurement { what, index }))
        .collect()
}

/// Reads a fit description serialized with its four field names.
pub fn description(value: &Value) -> Result<LsmDescription> {
    serde_json::from_value(value.clone()).map_err(|e| LsmError::NotADescription { reason: e.to_string() })
}
