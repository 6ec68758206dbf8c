//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::date::{CivilDate, parse_date_arg};

/// Rewrite a profile README with a seasonal header image and a daily quote
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: readme.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite the README for today
    #[command(visible_alias = "u")]
    Update {
        #[command(flatten)]
        args: UpdateArgs,
    },

    /// Show the image and quote for a date without touching any file
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        day: DayArgs,
    },

    /// Validate the config, the README and the quotes file
    #[command(visible_alias = "c")]
    Check,
}

/// Which day to resolve and how to draw the quote.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DayArgs {
    /// Resolve for this date instead of today (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub date: Option<CivilDate>,

    /// Seed for the random quote pick (reproducible output)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Update command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// README path, overriding `readme.path` (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub readme: Option<PathBuf>,

    /// Show what would change without writing the README
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seasonal-readme").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update() {
        let cli = parse(&["update", "--date", "2024-10-31", "--seed", "7", "-n"]);
        let Commands::Update { args } = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.day.date, Some(CivilDate::new(2024, 10, 31)));
        assert_eq!(args.day.seed, Some(7));
        assert!(args.dry_run);
        assert!(args.readme.is_none());
    }

    #[test]
    fn test_parse_aliases_and_globals() {
        let cli = parse(&["r", "-C", "profile.toml", "--verbose"]);
        assert!(matches!(cli.command, Commands::Resolve { .. }));
        assert_eq!(cli.config, Some(PathBuf::from("profile.toml")));
        assert!(cli.verbose);

        let cli = parse(&["--color", "never", "c"]);
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_parse_bad_date() {
        let result = Cli::try_parse_from(["seasonal-readme", "resolve", "--date", "31-10-2024"]);
        assert!(result.is_err());
    }
}
