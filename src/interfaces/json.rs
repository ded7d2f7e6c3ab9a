use crate::domain::options::OptionValue;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads a JSON object of options, keeping document key order.
pub fn read_options<R: Read>(source: R) -> Result<Vec<(String, OptionValue)>> {
    let document: OptionValue = serde_json::from_reader(source)?;
    match document {
        OptionValue::Object(map) => Ok(map.into_iter().collect()),
        other => Err(PaymentError::InvalidOptions(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &OptionValue) -> &'static str {
    match value {
        OptionValue::Null => "null",
        OptionValue::Bool(_) => "a boolean",
        OptionValue::Number(_) => "a number",
        OptionValue::String(_) => "a string",
        OptionValue::Array(_) => "an array",
        OptionValue::Object(_) => "an object",
    }
}
