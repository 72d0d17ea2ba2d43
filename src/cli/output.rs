// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output formatting

use std::io::{self, Write};

use console::{style, Term};

use crate::harness::Mismatch;
use crate::{Answer, Equation, Quadratic, TestCase};

/// Format `value` like C's `%.{precision}g`.
///
/// `precision` is the number of significant digits (at least one). Trailing
/// zeros are dropped, and scientific notation is used for very large or very
/// small magnitudes. Negative zero prints as `0`.
pub fn format_g(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    let value = value + 0.0;
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let max_exp = i32::try_from(precision).unwrap_or(i32::MAX);
    if exp < -4 || exp >= max_exp {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = usize::try_from(max_exp - 1 - exp).unwrap_or(0);
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The equation as text, e.g. `1x^2 - 3x + 2 = 0`.
pub fn format_equation(eq: &Equation, precision: usize) -> String {
    let sign = |x: f64| if x < 0.0 { '-' } else { '+' };
    format!(
        "{}x^2 {} {}x {} {} = 0",
        format_g(eq.a, precision),
        sign(eq.b),
        format_g(eq.b.abs(), precision),
        sign(eq.c),
        format_g(eq.c.abs(), precision),
    )
}

/// The answer as text, e.g. `Two roots: x1 = 1, x2 = 2`.
pub fn format_answer(answer: &Answer, precision: usize) -> String {
    match *answer {
        Answer::NoRoots => "No roots".to_string(),
        Answer::InfiniteRoots => "Any number is a root".to_string(),
        Answer::OneRoot(x) => format!("One root: x = {}", format_g(x, precision)),
        Answer::TwoRoots(x1, x2) => format!(
            "Two roots: x1 = {}, x2 = {}",
            format_g(x1, precision),
            format_g(x2, precision)
        ),
    }
}

/// Writes reports to an output stream, and errors to stderr.
///
/// Whether colors are used is fixed when the printer is made; nothing else
/// decides it.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
    err: Term,
    /// Whether to use colors on the output stream
    pub use_color: bool,
    /// Whether to use colors on stderr
    pub err_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl<W: Write> Printer<W> {
    /// Create a new printer writing reports to `out`
    pub fn new(out: W, use_color: bool, err_color: bool, quiet: bool) -> Self {
        Self {
            out,
            err: Term::stderr(),
            use_color,
            err_color,
            quiet,
        }
    }

    /// Give back the output stream
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a plain line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print the equation
    pub fn equation(&mut self, eq: &Equation) -> io::Result<()> {
        writeln!(self.out, "Equation: {}", format_equation(eq, eq.precision))
    }

    /// Print the vertex of the parabola and its value at `point`
    pub fn parabola(&mut self, q: &Quadratic, point: f64) -> io::Result<()> {
        let precision = q.equation().precision;
        writeln!(
            self.out,
            "Coordinate X of top of parabola: {}",
            format_g(q.vertex_x(), precision)
        )?;
        writeln!(
            self.out,
            "Coordinate Y of top of parabola: {}",
            format_g(q.vertex_y(), precision)
        )?;
        writeln!(
            self.out,
            "Value at point {}: {}",
            format_g(point, precision),
            format_g(q.eval(point), precision)
        )
    }

    /// Print the answer
    pub fn answer(&mut self, answer: &Answer, precision: usize) -> io::Result<()> {
        writeln!(self.out, "{}", format_answer(answer, precision))
    }

    /// Print a catalog entry with its expected answer
    pub fn test_case(&mut self, index: usize, case: &TestCase) -> io::Result<()> {
        writeln!(self.out, "------------------------- #{index}")?;
        self.equation(&case.equation)?;
        self.answer(&case.expected, case.equation.precision)
    }

    /// Print the details of a failed catalog run
    pub fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()> {
        let precision = mismatch.equation.precision;
        let header = format!("Failed on test #{}", mismatch.index);
        if self.use_color {
            writeln!(self.out, "{}", style(header).red().bold().force_styling(true))?;
        } else {
            writeln!(self.out, "{header}")?;
        }
        self.equation(&mismatch.equation)?;
        writeln!(
            self.out,
            "Expected: {}",
            format_answer(&mismatch.expected, precision)
        )?;
        writeln!(
            self.out,
            "Yours (wrong): {}",
            format_answer(&mismatch.actual, precision)
        )
    }

    /// Print a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.out, "{}", style(message).green().force_styling(true))
        } else {
            writeln!(self.out, "{message}")
        }
    }

    /// Print an error message on stderr
    pub fn error(&self, message: &str) -> io::Result<()> {
        let line = format!("Error: {message}");
        if self.err_color {
            self.err
                .write_line(&style(line).red().force_styling(true).to_string())
        } else {
            self.err.write_line(&line)
        }
    }

    /// Flush the output stream
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
