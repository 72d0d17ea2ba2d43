// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solving equations.

use core::cmp::Ordering;

use crate::common::max_magnitude;
use crate::{Answer, Epsilon, Equation};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Solve `a·x² + b·x + c = 0` with the default tolerance.
///
/// This never fails. When `a` is zero (under the comparator) the equation is
/// solved as linear: a single root `-c/b`, or, when `b` is zero too, either
/// infinitely many roots (`c` is zero) or none. Otherwise the sign of the
/// discriminant `b² - 4ac` decides between no roots, one repeated root and
/// two roots.
///
/// Two roots are computed with the numerically stable form of the quadratic
/// formula, which avoids the cancellation the textbook form suffers when `b`
/// is large compared to `a` and `c`, and are returned in ascending order.
///
/// # Examples
///
/// ```
/// use quadsolve::{solve, Answer, Equation};
///
/// assert_eq!(solve(&Equation::new(0.0, 0.0, 0.0)), Answer::InfiniteRoots);
/// assert_eq!(solve(&Equation::new(0.0, 2.0, -4.0)), Answer::OneRoot(2.0));
/// assert_eq!(solve(&Equation::new(1.0, 2.0, 1.0)), Answer::OneRoot(-1.0));
/// assert_eq!(solve(&Equation::new(1.0, 0.0, 1.0)), Answer::NoRoots);
/// ```
#[inline]
pub fn solve(eq: &Equation) -> Answer {
    solve_with(eq, Epsilon::DEFAULT)
}

/// Solve an equation, deciding what counts as zero with `eps`.
///
/// See [`solve`] for the rules.
pub fn solve_with(eq: &Equation, eps: Epsilon) -> Answer {
    let answer = if eps.is_zero(eq.a) {
        solve_linear(eq.b, eq.c, eps)
    } else {
        solve_quadratic(eq.a, eq.b, eq.c, eps)
    };
    tracing::trace!(a = eq.a, b = eq.b, c = eq.c, ?answer, "solved");
    answer
}

/// Solve `b·x + c = 0`.
///
/// # Examples
///
/// ```
/// use quadsolve::{solve_linear, Answer, Epsilon};
///
/// let eps = Epsilon::DEFAULT;
/// assert_eq!(solve_linear(4.0, 2.0, eps), Answer::OneRoot(-0.5));
/// assert_eq!(solve_linear(0.0, 1e-12, eps), Answer::InfiniteRoots);
/// assert_eq!(solve_linear(0.0, 3.0, eps), Answer::NoRoots);
/// ```
pub fn solve_linear(b: f64, c: f64, eps: Epsilon) -> Answer {
    if !eps.is_zero(b) {
        Answer::OneRoot(-c / b)
    } else if eps.is_zero(c) {
        Answer::InfiniteRoots
    } else {
        Answer::NoRoots
    }
}

/// Solve `a·x² + b·x + c = 0` for `a` known to be nonzero.
fn solve_quadratic(a: f64, b: f64, c: f64, eps: Epsilon) -> Answer {
    let (mut a, mut b, mut c) = (a, b, c);
    let mut disc = b * b - 4.0 * a * c;
    if !disc.is_finite() {
        // b² or 4ac overflowed. Scaling every coefficient by the same factor
        // leaves the roots unchanged.
        let k = max_magnitude(a, b, c);
        (a, b, c) = (a / k, b / k, c / k);
        disc = b * b - 4.0 * a * c;
    }
    match eps.sign(disc) {
        Ordering::Less => Answer::NoRoots,
        Ordering::Equal => Answer::OneRoot(-b / (2.0 * a)),
        Ordering::Greater => {
            // See https://math.stackexchange.com/questions/866331
            // q is never zero here: |b| + √D > 0.
            let q = -0.5 * (b + disc.sqrt().copysign(b));
            let x1 = q / a;
            let x2 = c / q;
            if x1 < x2 {
                Answer::TwoRoots(x1, x2)
            } else if x2 < x1 {
                Answer::TwoRoots(x2, x1)
            } else {
                Answer::OneRoot(x1)
            }
        }
    }
}

/// Something that can solve an [`Equation`].
///
/// This is the seam the [test harness](crate::harness) checks: any closure
/// `Fn(&Equation) -> Answer` is a solver, as is [`StandardSolver`].
pub trait Solver {
    /// Solve `eq`.
    fn solve(&self, eq: &Equation) -> Answer;
}

impl<F> Solver for F
where
    F: Fn(&Equation) -> Answer,
{
    #[inline]
    fn solve(&self, eq: &Equation) -> Answer {
        self(eq)
    }
}

/// The crate's own solver, [`solve_with`] at a fixed tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardSolver {
    /// The tolerance used for every zero test.
    pub eps: Epsilon,
}

impl StandardSolver {
    /// A solver using `eps`.
    #[inline]
    pub const fn new(eps: Epsilon) -> StandardSolver {
        StandardSolver { eps }
    }
}

impl Solver for StandardSolver {
    #[inline]
    fn solve(&self, eq: &Equation) -> Answer {
        solve_with(eq, self.eps)
    }
}
