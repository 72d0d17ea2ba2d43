// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading coefficients from flags or from an input stream.

use std::io::{BufRead, Write};

use crate::Equation;

use super::{CliError, CliResult};

/// Prompt shown before each attempt to read coefficients.
pub const PROMPT: &str = "Enter coefficients a, b, c: ";

/// Build an equation from exactly three coefficients.
///
/// # Errors
///
/// Fails unless there are exactly three values and all are finite.
pub fn equation_from_values(values: &[f64]) -> CliResult<Equation> {
    let &[a, b, c] = values else {
        return Err(CliError::invalid_input(format!(
            "expected 3 coefficients, got {}",
            values.len()
        )));
    };
    let eq = Equation::new(a, b, c);
    if !eq.is_finite() {
        return Err(CliError::invalid_input(format!(
            "coefficients must be finite, got {a}, {b}, {c}"
        )));
    }
    Ok(eq)
}

/// Parse a line such as `1 -3 2` or `1, -3, 2` into an equation.
///
/// # Errors
///
/// Fails on anything but three finite numbers.
pub fn parse_equation(line: &str) -> CliResult<Equation> {
    let values = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| CliError::invalid_input(format!("'{token}' is not a number")))
        })
        .collect::<CliResult<Vec<f64>>>()?;
    equation_from_values(&values)
}

/// Prompt on `prompt` and read lines from `input` until one holds a valid
/// equation.
///
/// Each rejected line is reported through `on_invalid` before asking again.
///
/// # Errors
///
/// Returns [`CliError::NoInput`] if `input` ends first, or an I/O error.
pub fn read_equation<R, W, F>(
    input: &mut R,
    prompt: &mut W,
    mut on_invalid: F,
) -> CliResult<Equation>
where
    R: BufRead,
    W: Write,
    F: FnMut(&CliError),
{
    let mut line = String::new();
    loop {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::NoInput);
        }
        match parse_equation(&line) {
            Ok(eq) => {
                tracing::debug!(?eq, "read equation");
                return Ok(eq);
            }
            Err(err) => on_invalid(&err),
        }
    }
}
