// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `quadsolve` command-line program.
//!
//! ```bash
//! quadsolve -u 1 -3 2          # solve x^2 - 3x + 2 = 0
//! quadsolve                    # prompt for a, b, c on stdin
//! quadsolve -u 1 0 -2 -p 4     # four significant digits
//! quadsolve --test             # check the solver against the catalog
//! quadsolve --list             # print the catalog
//! ```

mod commands;
mod config;
mod error;
pub mod input;
pub mod output;

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};

use tracing_subscriber::EnvFilter;

use crate::harness::Harness;
use crate::{solve_with, Catalog, Epsilon, Equation, StandardSolver};

pub use commands::{Cli, ColorArg, Mode};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Printer;

/// Build and check the configuration described by the parsed arguments.
///
/// # Errors
///
/// Fails when a setting is out of range, see [`CliConfig::validate`].
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let config = CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_precision(cli.precision)
        .with_point(cli.point)
        .with_epsilon(Epsilon::new(cli.epsilon));
    config.validate()?;
    Ok(config)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the level implied by `verbosity`.
pub fn init_tracing(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();
}

/// Print `err` on stderr the way every other error is printed.
pub fn report_error(err: &CliError, color: ColorChoice) {
    let printer = Printer::new(
        io::sink(),
        false,
        color.should_color(io::stderr().is_terminal()),
        false,
    );
    if printer.error(&err.to_string()).is_err() {
        eprintln!("Error: {err}");
    }
}

/// Run the program.
///
/// # Errors
///
/// Any failure to read the equation or write the report, and any failed
/// catalog validation or test, is returned for the caller to report.
pub fn run(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    let err_color = config.color.should_color(io::stderr().is_terminal());
    let (out, is_terminal): (Box<dyn Write>, bool) = match &cli.output {
        Some(path) => (Box::new(BufWriter::new(File::create(path)?)), false),
        None => (Box::new(io::stdout().lock()), io::stdout().is_terminal()),
    };
    let mut printer = Printer::new(
        out,
        config.color.should_color(is_terminal),
        err_color,
        config.verbosity.is_quiet(),
    );

    let mode = cli.mode();
    tracing::info!(?mode, "starting");
    let result = match mode {
        Mode::Solve => {
            let eq = match &cli.user {
                Some(values) => input::equation_from_values(values)?,
                None => read_stdin(&printer)?,
            };
            solve_and_report(&mut printer, eq.with_precision(config.precision), config)
        }
        Mode::Test => run_tests(&mut printer, config),
        Mode::List => list_tests(&mut printer, config.precision),
        Mode::Show(index) => show_test(&mut printer, index, config.precision),
    };
    printer.flush()?;
    result
}

fn read_stdin<W: Write>(printer: &Printer<W>) -> CliResult<Equation> {
    let stdin = io::stdin();
    input::read_equation(&mut stdin.lock(), &mut io::stderr(), |err| {
        // Unreadable stderr leaves nothing better to do than ask again.
        printer.error(&format!("{err}, try again")).ok();
    })
}

/// Print the equation, its parabola when it has one, and its roots.
///
/// # Errors
///
/// Only write errors.
pub fn solve_and_report<W: Write>(
    printer: &mut Printer<W>,
    eq: Equation,
    config: &CliConfig,
) -> CliResult<()> {
    printer.equation(&eq)?;
    match eq.as_quadratic_with(config.epsilon) {
        Some(parabola) => printer.parabola(&parabola, config.point)?,
        None => printer.line("Not a quadratic equation: no parabola vertex")?,
    }
    let answer = solve_with(&eq, config.epsilon);
    printer.answer(&answer, eq.precision)?;
    Ok(())
}

/// Validate the built-in catalog, then run the standard solver over it.
///
/// # Errors
///
/// The first invalid case or failed test, after its details are printed.
pub fn run_tests<W: Write>(printer: &mut Printer<W>, config: &CliConfig) -> CliResult<()> {
    let solver = StandardSolver::new(config.epsilon);
    let harness = Harness::new(with_precision(&Catalog::builtin(), config.precision), &solver)
        .with_epsilon(config.epsilon);

    printer.line("Running on tests:")?;
    harness.validate()?;
    printer.success("All tests are valid")?;
    if let Err(mismatch) = harness.run() {
        printer.mismatch(&mismatch)?;
        return Err(mismatch.into());
    }
    printer.success("All tests passed")?;
    Ok(())
}

/// Print every case of the built-in catalog.
///
/// # Errors
///
/// Only write errors.
pub fn list_tests<W: Write>(printer: &mut Printer<W>, precision: usize) -> CliResult<()> {
    let catalog = with_precision(&Catalog::builtin(), precision);
    printer.line(&format!("All tests ({}):", catalog.len()))?;
    for (index, case) in catalog.iter().enumerate() {
        printer.test_case(index, case)?;
    }
    Ok(())
}

/// Print the built-in case at `index`.
///
/// # Errors
///
/// [`CliError::TooFewTests`] when `index` is past the end of the catalog.
pub fn show_test<W: Write>(
    printer: &mut Printer<W>,
    index: usize,
    precision: usize,
) -> CliResult<()> {
    let catalog = with_precision(&Catalog::builtin(), precision);
    let case = catalog.get(index).ok_or(CliError::TooFewTests {
        index,
        len: catalog.len(),
    })?;
    printer.test_case(index, case)?;
    Ok(())
}

fn with_precision(catalog: &Catalog, precision: usize) -> Catalog {
    catalog
        .iter()
        .map(|case| {
            let mut case = *case;
            case.equation = case.equation.with_precision(precision);
            case
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn printer() -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), false, false, false)
    }

    fn text(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_build_config() {
        let cli = Cli::parse_from(["quadsolve", "-v", "-p", "6", "--color", "always"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.precision, 6);
        assert_eq!(config.color, ColorChoice::Always);

        let cli = Cli::parse_from(["quadsolve", "--epsilon", "0"]);
        assert!(matches!(
            build_config(&cli),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_report_quadratic() {
        let mut p = printer();
        solve_and_report(&mut p, Equation::new(1.0, -3.0, 2.0), &CliConfig::new()).unwrap();
        assert_eq!(
            text(p),
            "Equation: 1x^2 - 3x + 2 = 0\n\
             Coordinate X of top of parabola: 1.5\n\
             Coordinate Y of top of parabola: -0.25\n\
             Value at point 5: 12\n\
             Two roots: x1 = 1, x2 = 2\n"
        );
    }

    #[test]
    fn test_report_linear() {
        let mut p = printer();
        solve_and_report(&mut p, Equation::new(0.0, 2.0, -4.0), &CliConfig::new()).unwrap();
        let out = text(p);
        assert!(out.contains("Not a quadratic equation"));
        assert!(!out.contains("parabola:"));
        assert!(out.ends_with("One root: x = 2\n"));
    }

    #[test]
    fn test_report_precision() {
        let mut p = printer();
        let eq = Equation::new(1.0, 0.0, -2.0).with_precision(3);
        solve_and_report(&mut p, eq, &CliConfig::new().with_point(1.0)).unwrap();
        let out = text(p);
        assert!(out.contains("Value at point 1: -1\n"));
        assert!(out.ends_with("Two roots: x1 = -1.41, x2 = 1.41\n"));
    }

    #[test]
    fn test_run_tests_passes() {
        let mut p = printer();
        run_tests(&mut p, &CliConfig::new()).unwrap();
        let out = text(p);
        assert!(out.contains("All tests are valid"));
        assert!(out.ends_with("All tests passed\n"));
    }

    #[test]
    fn test_list_and_show() {
        let mut p = printer();
        list_tests(&mut p, 10).unwrap();
        let out = text(p);
        let len = Catalog::builtin().len();
        assert!(out.starts_with(&format!("All tests ({len}):")));
        assert_eq!(out.matches("Equation:").count(), len);

        let mut p = printer();
        show_test(&mut p, 0, 10).unwrap();
        assert!(text(p).contains("Any number is a root"));

        let err = show_test(&mut printer(), len, 10).unwrap_err();
        assert!(matches!(err, CliError::TooFewTests { index, .. } if index == len));
    }

    #[test]
    fn test_with_precision() {
        let catalog = with_precision(&Catalog::builtin(), 3);
        assert!(catalog.iter().all(|case| case.equation.precision == 3));
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }
}
