//! CLI argument parsing module.
//!
//! The CLI follows the pattern:
//! `fast-cumstats <statistic> <input.csv> [--init <value>] [-c <column>] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Running total of a value column
//! fast-cumstats sum returns.csv
//!
//! # Equity curve from daily returns, starting from 10,000
//! fast-cumstats prod returns.csv --init 10000 -o equity.csv
//!
//! # Running minimum of a named column, shifted by -1
//! fast-cumstats min prices.csv -c close --init -1
//!
//! # All five statistics in one pass
//! fast-cumstats all returns.csv
//! ```

use clap::{Parser, Subcommand};

/// fast-cumstats: cumulative statistics over a CSV column
#[derive(Parser, Debug)]
#[command(name = "fast-cumstats")]
#[command(author, version, about = "Cumulative sum, growth product, min, max and mean")]
#[command(long_about = "fast-cumstats computes running statistics over one numeric \
    column of a CSV file. Every output row depends only on the input rows up to and \
    including it, so no rows are dropped. Output is written to stdout or a file.")]
pub struct Args {
    /// The statistic to compute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every statistic.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct SeriesArgs {
    /// Input CSV file
    pub input: String,

    /// Initial value (offset for sum/min/max/mean, seed for prod)
    #[arg(long, allow_negative_numbers = true)]
    pub init: Option<f64>,

    /// Column holding the values (auto-detected if not specified)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Available statistic commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Cumulative sum plus offset
    #[command(about = "Cumulative sum plus offset (default 0)")]
    Sum(SeriesArgs),

    /// Cumulative product of (1 + x) growth factors times seed
    #[command(about = "Cumulative growth product times seed (default 1)")]
    Prod(SeriesArgs),

    /// Cumulative minimum plus offset
    #[command(about = "Cumulative minimum plus offset (default 0)")]
    Min(SeriesArgs),

    /// Cumulative maximum plus offset
    #[command(about = "Cumulative maximum plus offset (default 0)")]
    Max(SeriesArgs),

    /// Cumulative mean plus offset
    #[command(about = "Cumulative mean plus offset (default 0)")]
    Mean(SeriesArgs),

    /// All five statistics with one shared initial value
    #[command(about = "All five statistics in one pass, sharing one initial value (default 0)")]
    All(SeriesArgs),
}

impl Args {
    /// Get the input file path from the command.
    #[must_use]
    pub fn input_path(&self) -> &str {
        &self.command.series().input
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        self.command.series().output.as_deref()
    }
}

impl Command {
    /// The options shared by all commands.
    #[must_use]
    pub fn series(&self) -> &SeriesArgs {
        match self {
            Command::Sum(s)
            | Command::Prod(s)
            | Command::Min(s)
            | Command::Max(s)
            | Command::Mean(s)
            | Command::All(s) => s,
        }
    }

    /// Initial value used when `--init` is not given.
    #[must_use]
    pub fn default_init(&self) -> f64 {
        match self {
            Command::Prod(_) => fast_cumstats::DEFAULT_SEED,
            Command::Sum(_)
            | Command::Min(_)
            | Command::Max(_)
            | Command::Mean(_)
            | Command::All(_) => fast_cumstats::DEFAULT_OFFSET,
        }
    }

    /// The initial value to compute with.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.series().init.unwrap_or_else(|| self.default_init())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_sum_basic() {
        let args = parse(&["fast-cumstats", "sum", "input.csv"]);
        match &args.command {
            Command::Sum(s) => {
                assert_eq!(s.input, "input.csv");
                assert!(s.init.is_none());
                assert!(s.column.is_none());
                assert!(s.output.is_none());
            }
            other => panic!("Expected Sum command, got {other:?}"),
        }
        assert_eq!(args.command.initial_value(), 0.0);
    }

    #[test]
    fn test_parse_prod_defaults_to_unit_seed() {
        let args = parse(&["fast-cumstats", "prod", "input.csv"]);
        assert!(matches!(args.command, Command::Prod(_)));
        assert_eq!(args.command.initial_value(), 1.0);
    }

    #[test]
    fn test_parse_all_defaults_to_zero() {
        let args = parse(&["fast-cumstats", "all", "input.csv"]);
        assert!(matches!(args.command, Command::All(_)));
        assert_eq!(args.command.initial_value(), 0.0);
    }

    #[test]
    fn test_parse_init_overrides_default() {
        let args = parse(&["fast-cumstats", "prod", "input.csv", "--init", "10000"]);
        assert_eq!(args.command.initial_value(), 10_000.0);
    }

    #[test]
    fn test_parse_negative_init() {
        let args = parse(&["fast-cumstats", "min", "input.csv", "--init", "-2.5"]);
        assert_eq!(args.command.initial_value(), -2.5);

        let args = parse(&["fast-cumstats", "max", "input.csv", "--init=-1"]);
        assert_eq!(args.command.initial_value(), -1.0);
    }

    #[test]
    fn test_parse_column_and_output() {
        let args = parse(&[
            "fast-cumstats",
            "mean",
            "prices.csv",
            "-c",
            "close",
            "-o",
            "out.csv",
        ]);
        assert!(matches!(args.command, Command::Mean(_)));
        assert_eq!(args.input_path(), "prices.csv");
        assert_eq!(args.output_path(), Some("out.csv"));
        assert_eq!(args.command.series().column.as_deref(), Some("close"));
    }

    #[test]
    fn test_parse_long_flags() {
        let args = parse(&[
            "fast-cumstats",
            "sum",
            "in.csv",
            "--column",
            "value",
            "--output",
            "out.csv",
        ]);
        assert_eq!(args.command.series().column.as_deref(), Some("value"));
        assert_eq!(args.output_path(), Some("out.csv"));
    }

    #[test]
    fn test_every_statistic_parses() {
        for name in ["sum", "prod", "min", "max", "mean", "all"] {
            let args = parse(&["fast-cumstats", name, "in.csv"]);
            assert_eq!(args.input_path(), "in.csv");
        }
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Args::try_parse_from(["fast-cumstats", "sum"]).is_err());
    }

    #[test]
    fn test_unknown_statistic_is_error() {
        assert!(Args::try_parse_from(["fast-cumstats", "variance", "in.csv"]).is_err());
    }

    #[test]
    fn test_non_numeric_init_is_error() {
        assert!(Args::try_parse_from(["fast-cumstats", "sum", "in.csv", "--init", "abc"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
