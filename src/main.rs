//! seasonal-readme - keep a profile README dressed for the season.

mod cli;
mod config;
mod logger;
mod quote;
mod readme;
mod season;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProfileConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::status_error("operation failed", &format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ProfileConfig::load(cli)?;

    match &cli.command {
        Commands::Update { args } => cli::update::run_update(&config, args),
        Commands::Resolve { day } => cli::resolve::run_resolve(&config, day),
        Commands::Check => cli::check::run_check(&config),
    }
}
