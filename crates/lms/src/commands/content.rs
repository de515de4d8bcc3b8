//! `lms render` and `lms excerpt` command implementations.

use std::path::PathBuf;

use clap::Args;
use lms_config::{CliSettings, Config};
use lms_content::{excerpt, render_content};

use crate::error::CliError;
use crate::input::read_input;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup file to render (default: stdin).
    file: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let raw = read_input(self.file.as_deref())?;
        Output::new().emit(&render_content(raw.as_str()))
    }
}

/// Arguments for the excerpt command.
#[derive(Args)]
pub(crate) struct ExcerptArgs {
    /// Content file to preview (default: stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover lms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum preview length in characters (overrides config).
    #[arg(short, long)]
    max_len: Option<usize>,
}

impl ExcerptArgs {
    /// Execute the excerpt command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            max_len: self.max_len,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let raw = read_input(self.file.as_deref())?;
        Output::new().emit(&excerpt(raw.as_str(), config.excerpt.max_len))
    }
}
