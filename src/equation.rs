// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equations of the form `a·x² + b·x + c = 0`.

use core::fmt;

use crate::{solve_with, Answer, Epsilon};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Significant digits shown for results unless told otherwise.
pub const DEFAULT_PRECISION: usize = 10;

/// The equation `a·x² + b·x + c = 0`.
///
/// Any finite coefficients are accepted, including zero ones; an equation
/// with `a = 0` is simply classified as linear or constant when solved.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// Number of significant digits to show when reporting results.
    pub precision: usize,
}

/// The coefficient of `x²` is zero, so the equation has no parabola.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("equation is not quadratic: the x^2 coefficient is zero")]
pub struct NotQuadratic;

impl Equation {
    /// A new equation from its coefficients, with the default precision.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Equation {
        Equation {
            a,
            b,
            c,
            precision: DEFAULT_PRECISION,
        }
    }

    /// The same equation, reported with `precision` significant digits.
    #[inline]
    #[must_use]
    pub const fn with_precision(self, precision: usize) -> Equation {
        Equation { precision, ..self }
    }

    /// Solve the equation with the default tolerance.
    ///
    /// See [`solve`](crate::solve) for the classification rules.
    #[inline]
    pub fn solve(&self) -> Answer {
        solve_with(self, Epsilon::DEFAULT)
    }

    /// Evaluate the polynomial `a·x² + b·x + c` at `x`.
    ///
    /// This is defined for every equation, quadratic or not.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// The discriminant `b² - 4ac`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// View this equation as a true quadratic, if its `x²` coefficient is
    /// nonzero under the default tolerance.
    #[inline]
    pub fn as_quadratic(&self) -> Option<Quadratic> {
        self.as_quadratic_with(Epsilon::DEFAULT)
    }

    /// View this equation as a true quadratic, if its `x²` coefficient is
    /// nonzero under `eps`.
    pub fn as_quadratic_with(&self, eps: Epsilon) -> Option<Quadratic> {
        if eps.is_zero(self.a) {
            None
        } else {
            Some(Quadratic { eq: *self })
        }
    }

    /// Are all coefficients finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Is any coefficient NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl From<(f64, f64, f64)> for Equation {
    #[inline]
    fn from(v: (f64, f64, f64)) -> Equation {
        Equation::new(v.0, v.1, v.2)
    }
}

impl From<Equation> for (f64, f64, f64) {
    #[inline]
    fn from(eq: Equation) -> (f64, f64, f64) {
        (eq.a, eq.b, eq.c)
    }
}

/// Writes `a`, then a sign, then the magnitude of the next coefficient, so
/// that `x^2 - 3x + 2 = 0` reads naturally. Float formatting options such as
/// precision are applied to each coefficient.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.a, f)?;
        write!(f, "x^2 {} ", if self.b < 0.0 { '-' } else { '+' })?;
        fmt::Display::fmt(&self.b.abs(), f)?;
        write!(f, "x {} ", if self.c < 0.0 { '-' } else { '+' })?;
        fmt::Display::fmt(&self.c.abs(), f)?;
        write!(f, " = 0")
    }
}

/// An equation whose `x²` coefficient is known to be nonzero.
///
/// Only [`Equation::as_quadratic`] (and the `TryFrom` conversion) can build
/// one, so the vertex of the parabola is always well defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    eq: Equation,
}

impl Quadratic {
    /// The underlying equation.
    #[inline]
    pub fn equation(&self) -> &Equation {
        &self.eq
    }

    /// Evaluate `a·x² + b·x + c` at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.eq.eval(x)
    }

    /// The x coordinate of the vertex, `-b / 2a`.
    ///
    /// This is the only stationary point of the parabola.
    #[inline]
    pub fn vertex_x(&self) -> f64 {
        -self.eq.b / (2.0 * self.eq.a)
    }

    /// The y coordinate of the vertex: the polynomial at [`vertex_x`].
    ///
    /// [`vertex_x`]: Quadratic::vertex_x
    #[inline]
    pub fn vertex_y(&self) -> f64 {
        self.eval(self.vertex_x())
    }
}

impl TryFrom<Equation> for Quadratic {
    type Error = NotQuadratic;

    fn try_from(eq: Equation) -> Result<Quadratic, NotQuadratic> {
        eq.as_quadratic().ok_or(NotQuadratic)
    }
}

impl From<Quadratic> for Equation {
    #[inline]
    fn from(q: Quadratic) -> Equation {
        q.eq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_any_degree() {
        let eq = Equation::new(1.0, -3.0, 2.0);
        assert_eq!(eq.eval(1.0), 0.0);
        assert_eq!(eq.eval(5.0), 12.0);
        let linear = Equation::new(0.0, 2.0, -4.0);
        assert_eq!(linear.eval(2.0), 0.0);
        assert_eq!(linear.eval(0.0), -4.0);
    }

    #[test]
    fn quadratic_only_when_a_nonzero() {
        assert!(Equation::new(0.0, 1.0, 1.0).as_quadratic().is_none());
        assert!(Equation::new(1e-12, 1.0, 1.0).as_quadratic().is_none());
        assert!(Equation::new(-2.0, 0.0, 0.0).as_quadratic().is_some());
        assert_eq!(
            Quadratic::try_from(Equation::new(0.0, 0.0, 0.0)),
            Err(NotQuadratic)
        );
        let loose = Epsilon::new(1e-3);
        assert!(Equation::new(1e-4, 1.0, 1.0)
            .as_quadratic_with(loose)
            .is_none());
    }

    #[test]
    fn vertex() {
        let q = Equation::new(2.0, -8.0, 3.0).as_quadratic().unwrap();
        assert_eq!(q.vertex_x(), 2.0);
        assert_eq!(q.vertex_y(), -5.0);
        assert_eq!(q.eval(q.vertex_x()), q.vertex_y());
        // The derivative vanishes at the vertex.
        let eq = q.equation();
        assert_eq!(2.0 * eq.a * q.vertex_x() + eq.b, 0.0);
    }

    #[test]
    fn vertex_is_the_extremum() {
        let q = Equation::new(-0.5, 3.0, 1.0).as_quadratic().unwrap();
        let vx = q.vertex_x();
        // a < 0, so the vertex is a maximum.
        for dx in [1e-3, 0.5, 10.0] {
            assert!(q.eval(vx + dx) < q.vertex_y());
            assert!(q.eval(vx - dx) < q.vertex_y());
        }
    }

    #[test]
    fn precision_is_carried() {
        let eq = Equation::new(1.0, 2.0, 3.0);
        assert_eq!(eq.precision, DEFAULT_PRECISION);
        assert_eq!(eq.with_precision(4).precision, 4);
        assert_eq!(Equation::from((1.0, 2.0, 3.0)), eq);
    }

    #[test]
    fn display() {
        let eq = Equation::new(1.0, -3.0, 2.0);
        assert_eq!(format!("{}", eq), "1x^2 - 3x + 2 = 0");
        let eq = Equation::new(-0.5, 0.25, -1.0);
        assert_eq!(format!("{:.2}", eq), "-0.50x^2 + 0.25x - 1.00 = 0");
    }
}
