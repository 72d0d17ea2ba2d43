// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CLI configuration

use crate::{Epsilon, DEFAULT_PRECISION};

use super::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - harness progress
    Verbose,
    /// Debug - every solver call
    Debug,
}

impl Verbosity {
    /// From the `-q` flag and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default tracing filter directive for this level
    #[must_use]
    pub const fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors, given whether the stream is a terminal
    #[must_use]
    pub const fn should_color(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Significant digits for printed numbers
    pub precision: usize,
    /// Point at which the polynomial is evaluated
    pub point: f64,
    /// Comparator tolerance
    pub epsilon: Epsilon,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            precision: DEFAULT_PRECISION,
            point: 5.0,
            epsilon: Epsilon::DEFAULT,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set evaluation point
    #[must_use]
    pub const fn with_point(mut self, point: f64) -> Self {
        self.point = point;
        self
    }

    /// Set comparator tolerance
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: Epsilon) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Reject settings the solver cannot work with.
    ///
    /// # Errors
    ///
    /// Fails when the tolerance is not a positive finite number, when the
    /// evaluation point is not finite, or when the precision is zero.
    pub fn validate(&self) -> CliResult<()> {
        let eps = self.epsilon.value;
        if !(eps.is_finite() && eps > 0.0) {
            return Err(CliError::invalid_argument(format!(
                "epsilon must be a positive number, got {eps}"
            )));
        }
        if !self.point.is_finite() {
            return Err(CliError::invalid_argument(format!(
                "evaluation point must be finite, got {}",
                self.point
            )));
        }
        if self.precision == 0 {
            return Err(CliError::invalid_argument("precision must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
        assert!(Verbosity::Quiet.is_quiet());
        assert_eq!(Verbosity::Normal.filter(), "warn");
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Always.should_color(false));
        assert!(!ColorChoice::Never.should_color(true));
        assert!(ColorChoice::Auto.should_color(true));
        assert!(!ColorChoice::Auto.should_color(false));
    }

    #[test]
    fn test_config_builder() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_color(ColorChoice::Never)
            .with_precision(4)
            .with_point(-1.5)
            .with_epsilon(Epsilon::new(1e-6));
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.precision, 4);
        assert_eq!(config.point, -1.5);
        assert_eq!(config.epsilon.value, 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(CliConfig::default().validate().is_ok());
        for eps in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            let config = CliConfig::new().with_epsilon(Epsilon::new(eps));
            assert!(config.validate().is_err(), "{eps}");
        }
        assert!(CliConfig::new().with_point(f64::NAN).validate().is_err());
        assert!(CliConfig::new().with_precision(0).validate().is_err());
    }
}
