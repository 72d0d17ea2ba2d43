// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the CLI

use thiserror::Error;

use crate::harness::{InvalidCase, Mismatch};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Coefficients could not be read
    #[error("incorrect input: {message}")]
    InvalidInput {
        /// Error message
        message: String,
    },

    /// Input ended before a full equation was read
    #[error("no equation given: input ended")]
    NoInput,

    /// Invalid argument
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// A catalog index past the end
    #[error("there are too few tests: asked for #{index}, have {len}")]
    TooFewTests {
        /// Requested index
        index: usize,
        /// Number of tests in the catalog
        len: usize,
    },

    /// The built-in catalog is inconsistent
    #[error("tests validation failed: {0}")]
    Validation(#[from] InvalidCase),

    /// The solver got a catalog entry wrong
    #[error("{0}")]
    Run(#[from] Mismatch),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Equation};

    #[test]
    fn test_invalid_input_error() {
        let err = CliError::invalid_input("expected 3 numbers");
        assert!(err.to_string().contains("incorrect input"));
        assert!(err.to_string().contains("expected 3 numbers"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad epsilon");
        assert!(err.to_string().contains("invalid argument"));
    }

    #[test]
    fn test_too_few_tests_error() {
        let err = CliError::TooFewTests { index: 40, len: 27 };
        assert_eq!(
            err.to_string(),
            "there are too few tests: asked for #40, have 27"
        );
    }

    #[test]
    fn test_mismatch_from() {
        let mismatch = Mismatch {
            index: 3,
            equation: Equation::new(1.0, 0.0, 1.0),
            actual: Answer::OneRoot(0.0),
            expected: Answer::NoRoots,
        };
        let err: CliError = mismatch.into();
        assert!(err.to_string().starts_with("failed on test #3"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }
}
