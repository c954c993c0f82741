//! `famvault` - CLI for familyvault
//!
//! Running without arguments creates the sample records and prints the
//! summary report.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use familyvault::cli::{Cli, Command, ConfigCommand, ReportCommand};
use familyvault::{demo, init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Validation has to run before the active config is loaded, since that
    // config may be the broken file being checked.
    if let Some(path) = cli.validate_target() {
        init_logging(cli.verbosity(), None);
        return handle_validate(&path);
    }

    let config = Config::load_from(cli.config.clone()).context("could not load configuration")?;

    init_logging(cli.verbosity(), config.logging.level.as_deref());
    debug!(?config, "configuration loaded");

    match &cli.command {
        None => handle_report(&config, &ReportCommand::default()),
        Some(Command::Report(report_cmd)) => handle_report(&config, report_cmd),
        Some(Command::Config(config_cmd)) => handle_config(&cli, &config, config_cmd),
    }
}

fn handle_report(config: &Config, cmd: &ReportCommand) -> anyhow::Result<()> {
    let options = cmd.apply(&config.report);
    demo::run(io::stdout().lock(), &options).context("could not write report")?;
    Ok(())
}

fn handle_validate(path: &Path) -> anyhow::Result<()> {
    Config::validate_file(path)
        .with_context(|| format!("{} is not a valid configuration", path.display()))?;
    println!("{}: configuration is valid", path.display());
    Ok(())
}

fn handle_config(cli: &Cli, config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json: true } => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommand::Show { json: false } => {
            let level = config.logging.level.as_deref().unwrap_or("(from flags)");
            println!("report.format             = {}", config.report.format);
            println!(
                "report.show_confirmations = {}",
                config.report.show_confirmations
            );
            println!("logging.level             = {level}");
        }
        ConfigCommand::Path => {
            let path = cli.config.clone().unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { .. } => {
            let path = cli.validate_target().unwrap_or_else(Config::default_config_path);
            handle_validate(&path)?;
        }
    }
    Ok(())
}
