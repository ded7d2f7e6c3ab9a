use crate::domain::options::OptionValue;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct OptionRecord {
    option: String,
    value: String,
}

/// Reads option pairs from a CSV source with an `option,value` header.
///
/// Values are passed on as JSON strings; the receiving setter coerces them.
pub struct OptionsReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OptionsReader<R> {
    /// Creates a new `OptionsReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily yields option pairs in row order.
    pub fn options(self) -> impl Iterator<Item = Result<(String, OptionValue)>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: OptionRecord| (record.option, OptionValue::String(record.value)))
                .map_err(PaymentError::from)
        })
    }
}
