//! Terminal output utilities.
//!
//! Results go to stdout so they can be piped; diagnostics go to stderr.

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Terminal output formatter.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
        }
    }

    /// Write a result to stdout.
    pub(crate) fn emit(&self, text: &str) -> Result<(), CliError> {
        self.out.write_line(text)?;
        Ok(())
    }

    /// Write a value to stdout as JSON.
    pub(crate) fn emit_json<T: Serialize>(&self, value: &T, pretty: bool) -> Result<(), CliError> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        self.emit(&json)
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
