//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputMode;

/// Search, filter and summarize advertising campaigns.
#[derive(Debug, Parser)]
#[command(name = "campaigns", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output mode
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub output: Option<OutputMode>,

    /// YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject malformed filter values instead of ignoring them
    #[arg(long, global = true, overrides_with = "no_strict")]
    pub strict: bool,

    /// Ignore malformed filter values, even when the config asks for strict
    #[arg(long, global = true, overrides_with = "strict")]
    pub no_strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Load campaigns from a CSV file instead of the built-in dataset
    #[arg(long, global = true, value_name = "CSV")]
    pub data: Option<PathBuf>,
}

impl Cli {
    /// The strictness chosen on the command line, if any. The last of
    /// `--strict` and `--no-strict` wins.
    pub fn strict_flag(&self) -> Option<bool> {
        match (self.strict, self.no_strict) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List matching campaigns with headline metrics
    List(FilterArgs),
    /// Aggregate matching campaigns by agency, sector, media and strategy
    Summary(FilterArgs),
    /// Show the values available to each filter
    Options,
}

/// Search and filter flags shared by `list` and `summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FilterArgs {
    /// Case-insensitive keyword
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Field to search (repeatable; replaces the configured fields)
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    #[arg(long)]
    pub agency: Option<String>,

    #[arg(long)]
    pub sector: Option<String>,

    /// Strategy type
    #[arg(long)]
    pub strategy: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    /// Media channel (repeatable; matches campaigns on any of them)
    #[arg(long = "media", value_name = "CHANNEL")]
    pub media: Vec<String>,

    /// Earliest launch date, inclusive (defaults to the earliest in the data)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Latest launch date, inclusive (defaults to the latest in the data)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("campaigns").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn list_with_filters() {
        let cli = parse(&[
            "list",
            "-k",
            "perú",
            "--field",
            "name",
            "--field",
            "description",
            "--sector",
            "Bebidas",
            "--media",
            "Radio",
            "--media",
            "Digital",
            "--from",
            "2023-01-01",
        ]);
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.keyword.as_deref(), Some("perú"));
        assert_eq!(args.fields, vec!["name", "description"]);
        assert_eq!(args.sector.as_deref(), Some("Bebidas"));
        assert_eq!(args.media, vec!["Radio", "Digital"]);
        assert_eq!(args.from.as_deref(), Some("2023-01-01"));
        assert_eq!(args.to, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["summary", "--output", "csv", "-vv", "--strict"]);
        assert_eq!(cli.output, Some(OutputMode::Csv));
        assert_eq!(cli.verbose, 2);
        assert!(cli.strict);
        assert!(matches!(cli.command, Command::Summary(_)));
    }

    #[test]
    fn output_defaults_to_unset() {
        let cli = parse(&["options"]);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn strict_flags_last_one_wins() {
        assert_eq!(parse(&["options"]).strict_flag(), None);
        assert_eq!(parse(&["--strict", "options"]).strict_flag(), Some(true));
        assert_eq!(parse(&["--no-strict", "options"]).strict_flag(), Some(false));
        assert_eq!(
            parse(&["--strict", "options", "--no-strict"]).strict_flag(),
            Some(false)
        );
        assert_eq!(
            parse(&["--no-strict", "--strict", "options"]).strict_flag(),
            Some(true)
        );
    }

    #[test]
    fn rejects_unknown_output_mode() {
        let result = Cli::try_parse_from(["campaigns", "--output", "xml", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_subcommand() {
        assert!(Cli::try_parse_from(["campaigns"]).is_err());
    }
}
