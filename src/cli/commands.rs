// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, ArgAction, Parser, ValueEnum};

use crate::{DEFAULT_EPSILON, DEFAULT_PRECISION};

/// Solve a·x² + b·x + c = 0, or check the solver against its built-in tests
#[derive(Parser, Debug)]
#[command(name = "quadsolve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Coefficients a, b and c (read from stdin when omitted)
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["A", "B", "C"],
        allow_negative_numbers = true
    )]
    pub user: Option<Vec<f64>>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Significant digits in printed numbers
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PRECISION,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=40)
    )]
    pub precision: usize,

    /// Point at which to evaluate the polynomial
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub point: f64,

    /// Magnitude below which a value counts as zero
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Validate the built-in test catalog and run the solver against it
    #[arg(long, conflicts_with_all = ["user", "list", "show"])]
    pub test: bool,

    /// Print every case of the built-in test catalog
    #[arg(long, conflicts_with_all = ["user", "show"])]
    pub list: bool,

    /// Print the built-in test case at INDEX
    #[arg(long, value_name = "INDEX", conflicts_with = "user")]
    pub show: Option<usize>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// What the program has been asked to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Solve one equation
    Solve,
    /// Validate and run the test catalog
    Test,
    /// Print the whole test catalog
    List,
    /// Print one test case
    Show(usize),
}

impl Cli {
    /// The mode selected by the flags
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.test {
            Mode::Test
        } else if self.list {
            Mode::List
        } else if let Some(index) = self.show {
            Mode::Show(index)
        } else {
            Mode::Solve
        }
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for super::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_user_coefficients() {
        let cli = Cli::try_parse_from(["quadsolve", "-u", "1", "-3", "2"]).unwrap();
        assert_eq!(cli.user, Some(vec![1.0, -3.0, 2.0]));
        assert_eq!(cli.mode(), Mode::Solve);
        assert_eq!(cli.precision, DEFAULT_PRECISION);
        assert_eq!(cli.point, 5.0);

        let cli = Cli::try_parse_from(["quadsolve", "--user", "-1", "-2", "-3.5"]).unwrap();
        assert_eq!(cli.user, Some(vec![-1.0, -2.0, -3.5]));
    }

    #[test]
    fn test_user_needs_three_values() {
        assert!(Cli::try_parse_from(["quadsolve", "-u", "1", "2"]).is_err());
        assert!(Cli::try_parse_from(["quadsolve", "-u", "1", "x", "2"]).is_err());
    }

    #[test]
    fn test_modes() {
        let cli = Cli::try_parse_from(["quadsolve", "--test"]).unwrap();
        assert_eq!(cli.mode(), Mode::Test);
        let cli = Cli::try_parse_from(["quadsolve", "--list"]).unwrap();
        assert_eq!(cli.mode(), Mode::List);
        let cli = Cli::try_parse_from(["quadsolve", "--show", "4"]).unwrap();
        assert_eq!(cli.mode(), Mode::Show(4));
        let cli = Cli::try_parse_from(["quadsolve"]).unwrap();
        assert_eq!(cli.mode(), Mode::Solve);
    }

    #[test]
    fn test_conflicting_modes() {
        assert!(Cli::try_parse_from(["quadsolve", "--test", "-u", "1", "2", "3"]).is_err());
        assert!(Cli::try_parse_from(["quadsolve", "--test", "--list"]).is_err());
        assert!(Cli::try_parse_from(["quadsolve", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "quadsolve",
            "-u",
            "1",
            "0",
            "-1",
            "-p",
            "4",
            "--point",
            "-2",
            "--epsilon",
            "1e-6",
            "-o",
            "report.txt",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.precision, 4);
        assert_eq!(cli.point, -2.0);
        assert_eq!(cli.epsilon, 1e-6);
        assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
    }

    #[test]
    fn test_precision_range() {
        assert!(Cli::try_parse_from(["quadsolve", "-p", "0"]).is_err());
        assert!(Cli::try_parse_from(["quadsolve", "-p", "41"]).is_err());
    }
}
