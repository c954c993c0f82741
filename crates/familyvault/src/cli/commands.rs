//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::ReportConfig;

/// Report command arguments.
#[derive(Debug, Default, Args)]
pub struct ReportCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Don't print a confirmation line for each created record
    #[arg(long)]
    pub no_confirmations: bool,
}

impl ReportCommand {
    /// Apply these arguments on top of the configured report options.
    #[must_use]
    pub fn apply(&self, configured: &ReportConfig) -> ReportConfig {
        let mut options = configured.clone();
        if let Some(format) = self.format {
            options.format = format.into();
        }
        if self.no_confirmations {
            options.show_confirmations = false;
        }
        options
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate a configuration file (exits non-zero if it is missing or invalid)
    Validate {
        /// File to validate (defaults to --config, then the default path)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned text
    #[default]
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for crate::report::ReportFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}
