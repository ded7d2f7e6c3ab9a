use adaptive_pay::domain::options::OptionValue;
use adaptive_pay::domain::sender::Sender;
use adaptive_pay::interfaces::{OptionsFormat, read_options_file};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Options file: CSV with an `option,value` header, or a JSON object
    input: Option<PathBuf>,

    /// Format of the options file. Guessed from the extension when omitted.
    #[arg(long, value_enum)]
    format: Option<OptionsFormat>,

    /// Inline option as `name=value`, applied after the file. Repeatable.
    #[arg(short = 'o', long = "option", value_parser = parse_option)]
    options: Vec<(String, String)>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_option(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing option name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut options: Vec<(String, OptionValue)> = Vec::new();
    if let Some(path) = &cli.input {
        let format = cli.format.unwrap_or_else(|| OptionsFormat::from_path(path));
        tracing::debug!(path = %path.display(), ?format, "reading options file");
        options.extend(read_options_file(path, format).into_diagnostic()?);
    }
    options.extend(
        cli.options
            .into_iter()
            .map(|(name, value)| (name, OptionValue::String(value))),
    );

    let sender = Sender::new(options).into_diagnostic()?;
    println!("{sender}");

    Ok(())
}
