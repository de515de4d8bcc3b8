//! Command input sources.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Read the whole input: a file when `path` is given, stdin otherwise.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => read_from(std::io::stdin().lock()),
    }
}

fn read_from(mut reader: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
