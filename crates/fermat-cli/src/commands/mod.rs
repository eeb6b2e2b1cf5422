pub mod check;
pub mod euclid;
pub mod near;
pub mod pythagorean;
pub mod search;
pub mod survey;

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use fermat_core::{to_canonical_json_pretty, FermatError};
use fermat_exp::write_rows_csv;
use serde::Serialize;

/// Encoding of tabular command output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub(crate) fn boxed(err: FermatError) -> Box<dyn Error> {
    Box::new(err) as Box<dyn Error>
}

/// Renders `rows` as a JSON document or CSV table.
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    document: &impl Serialize,
    rows: &[T],
) -> Result<Vec<u8>, Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let mut text = to_canonical_json_pretty(document).map_err(boxed)?;
            text.push('\n');
            Ok(text.into_bytes())
        }
        OutputFormat::Csv => {
            let mut bytes = Vec::new();
            write_rows_csv(&mut bytes, rows).map_err(boxed)?;
            Ok(bytes)
        }
    }
}

/// Writes to `out` when given, otherwise to stdout.
pub(crate) fn emit(out: Option<&Path>, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, bytes)?;
            log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
