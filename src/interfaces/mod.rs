//! Input adapters that turn external sources into options mappings.

pub mod csv;
pub mod json;

use crate::domain::options::OptionValue;
use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Encoding of an options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionsFormat {
    /// Two columns, `option,value`, one pair per row.
    Csv,
    /// A single JSON object.
    Json,
}

impl OptionsFormat {
    /// Guesses the format from the file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Reads every option pair from `path`, in source order.
pub fn read_options_file(
    path: &Path,
    format: OptionsFormat,
) -> Result<Vec<(String, OptionValue)>> {
    let file = File::open(path)?;
    match format {
        OptionsFormat::Csv => csv::options_reader::OptionsReader::new(file).options().collect(),
        OptionsFormat::Json => json::read_options(file),
    }
}
