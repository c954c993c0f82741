//! Command-line interface for familyvault.
//!
//! This module provides the CLI structure for the `famvault` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, OutputFormat, ReportCommand};

/// famvault - Keep track of family members, assets, and documents
///
/// Creates a set of sample records and prints a summary report. Running
/// without a command is the same as `famvault report`.
#[derive(Debug, Parser)]
#[command(name = "famvault")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the sample records and print the summary report
    Report(ReportCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The file `config validate` should check, if that is the command.
    ///
    /// Falls back from `--file` to the global `--config`, then to the
    /// default config path.
    #[must_use]
    pub fn validate_target(&self) -> Option<PathBuf> {
        match &self.command {
            Some(Command::Config(ConfigCommand::Validate { file })) => Some(
                file.clone()
                    .or_else(|| self.config.clone())
                    .unwrap_or_else(crate::Config::default_config_path),
            ),
            _ => None,
        }
    }
}
