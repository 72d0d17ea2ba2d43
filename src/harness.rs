// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checking solvers against a [`Catalog`] of known answers.
//!
//! There are two passes. [`validate`] makes sure the catalog itself is
//! sound: two-root answers are strictly ascending and every expected root
//! really zeroes its equation. [`run`] then feeds each equation to a
//! [`Solver`] and compares what comes back with the expected answer. Both
//! scan the catalog from index zero and stop at the first failure.
//!
//! All comparisons go through the [`Epsilon`] comparator, so a solver is
//! never failed over rounding noise.

use crate::{Answer, Catalog, Epsilon, Equation, Solver, TestCase};

/// Why a catalog entry is not self-consistent.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Defect {
    /// A two-root answer whose roots are not strictly ascending.
    #[error("roots {root1} and {root2} are not in ascending order")]
    Unordered {
        /// The first root.
        root1: f64,
        /// The second root.
        root2: f64,
    },
    /// An expected root that does not zero the polynomial.
    #[error("{root} is not a root: the polynomial evaluates to {residual}")]
    NotARoot {
        /// The claimed root.
        root: f64,
        /// The value of the polynomial there.
        residual: f64,
    },
}

/// The catalog entry at `index` failed validation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("test #{index} is invalid: {defect}")]
pub struct InvalidCase {
    /// Position of the entry in the catalog.
    pub index: usize,
    /// The offending entry.
    pub case: TestCase,
    /// What is wrong with it.
    pub defect: Defect,
}

/// A solver gave the wrong answer for the catalog entry at `index`.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("failed on test #{index} ({equation}): expected {expected}, got {actual}")]
pub struct Mismatch {
    /// Position of the entry in the catalog.
    pub index: usize,
    /// The equation the solver was given.
    pub equation: Equation,
    /// What the solver returned.
    pub actual: Answer,
    /// What it should have returned.
    pub expected: Answer,
}

/// Check a single catalog entry for self-consistency.
///
/// # Errors
///
/// Returns the first [`Defect`] found: an unordered pair of roots, or a root
/// at which the polynomial is not zero.
pub fn check_case(case: &TestCase, eps: Epsilon) -> Result<(), Defect> {
    if let Answer::TwoRoots(root1, root2) = case.expected {
        if eps.sign(root1 - root2).is_ge() {
            return Err(Defect::Unordered { root1, root2 });
        }
    }
    for root in case.expected.roots() {
        let residual = case.equation.eval(root);
        if !eps.is_zero(residual) {
            return Err(Defect::NotARoot { root, residual });
        }
    }
    Ok(())
}

/// Validate every entry of `catalog` with the default tolerance.
///
/// # Errors
///
/// Returns the first entry that fails [`check_case`].
pub fn validate(catalog: &Catalog) -> Result<(), InvalidCase> {
    validate_with(catalog, Epsilon::DEFAULT)
}

/// Validate every entry of `catalog`, comparing with `eps`.
///
/// # Errors
///
/// Returns the first entry that fails [`check_case`].
pub fn validate_with(catalog: &Catalog, eps: Epsilon) -> Result<(), InvalidCase> {
    for (index, case) in catalog.iter().enumerate() {
        check_case(case, eps).map_err(|defect| InvalidCase {
            index,
            case: *case,
            defect,
        })?;
    }
    tracing::debug!(cases = catalog.len(), "catalog is valid");
    Ok(())
}

/// Whether `actual` is an acceptable solver result when `expected` is right.
///
/// The root counts must agree, and the roots must agree slot by slot under
/// `eps`: the first root with the first root and the second with the
/// second. A single root sits in both slots, so comparing the second slots
/// compares the roots themselves. A two-root `actual` that is not strictly
/// ascending never matches.
pub fn answers_match(actual: &Answer, expected: &Answer, eps: Epsilon) -> bool {
    if actual.count() != expected.count() || !actual.is_canonical() {
        return false;
    }
    match (*actual, *expected) {
        (Answer::TwoRoots(a1, a2), Answer::TwoRoots(e1, e2)) => {
            eps.approx_eq(a1, e1) && eps.approx_eq(a2, e2)
        }
        (Answer::OneRoot(_), Answer::OneRoot(_)) => match (actual.root2(), expected.root2()) {
            (Some(a2), Some(e2)) => eps.approx_eq(a2, e2),
            _ => false,
        },
        _ => true,
    }
}

/// Run `solver` over `catalog` with the default tolerance.
///
/// # Errors
///
/// Returns the first entry the solver gets wrong, with both answers.
pub fn run<S: Solver + ?Sized>(catalog: &Catalog, solver: &S) -> Result<(), Mismatch> {
    run_with(catalog, solver, Epsilon::DEFAULT)
}

/// Run `solver` over `catalog`, comparing answers with `eps`.
///
/// # Errors
///
/// Returns the first entry the solver gets wrong, with both answers.
pub fn run_with<S: Solver + ?Sized>(
    catalog: &Catalog,
    solver: &S,
    eps: Epsilon,
) -> Result<(), Mismatch> {
    for (index, case) in catalog.iter().enumerate() {
        let actual = solver.solve(&case.equation);
        if !answers_match(&actual, &case.expected, eps) {
            return Err(Mismatch {
                index,
                equation: case.equation,
                actual,
                expected: case.expected,
            });
        }
        tracing::debug!(index, %actual, "passed");
    }
    tracing::info!(cases = catalog.len(), "all tests passed");
    Ok(())
}

/// A catalog paired with the solver under test.
///
/// The harness owns its catalog and borrows the solver, so one solver can be
/// checked by several harnesses.
#[derive(Debug)]
pub struct Harness<'s, S: ?Sized> {
    catalog: Catalog,
    solver: &'s S,
    eps: Epsilon,
}

impl<'s, S: Solver + ?Sized> Harness<'s, S> {
    /// A harness over `catalog` for `solver`, using the default tolerance.
    pub fn new(catalog: Catalog, solver: &'s S) -> Self {
        Harness {
            catalog,
            solver,
            eps: Epsilon::DEFAULT,
        }
    }

    /// The same harness comparing with `eps`.
    #[must_use]
    pub fn with_epsilon(self, eps: Epsilon) -> Self {
        Harness { eps, ..self }
    }

    /// The catalog under test.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// See [`validate_with`].
    ///
    /// # Errors
    ///
    /// Returns the first invalid catalog entry.
    pub fn validate(&self) -> Result<(), InvalidCase> {
        validate_with(&self.catalog, self.eps)
    }

    /// See [`run_with`].
    ///
    /// # Errors
    ///
    /// Returns the first entry the solver gets wrong.
    pub fn run(&self) -> Result<(), Mismatch> {
        run_with(&self.catalog, self.solver, self.eps)
    }
}
