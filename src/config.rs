//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for markwash.
///
/// Rendering options are fixed at process start and intentionally not
/// exposed as flags; the CLI only selects where markdown comes from and
/// where sanitized HTML goes.
#[derive(Debug, Clone, Parser)]
#[command(name = "markwash", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input path was given but does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input
            && !input.exists()
        {
            bail!("Input file does not exist: {}", input.display());
        }

        Ok(())
    }
}
