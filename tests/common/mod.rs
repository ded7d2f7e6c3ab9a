use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn write_options_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());

    wtr.write_record(["option", "value"])?;
    for (option, value) in rows {
        wtr.write_record([option, value])?;
    }

    wtr.flush()?;
    drop(wtr);
    Ok(file)
}

pub fn write_options_json(body: &str) -> Result<NamedTempFile, Error> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    file.write_all(body.as_bytes())?;
    file.flush()?;
    Ok(file)
}
