// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in catalog of equations with known answers.

use alloc::vec::Vec;
use core::slice;

use crate::{Answer, Equation};

/// An equation together with the answer a correct solver must produce.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestCase {
    /// The equation to solve.
    pub equation: Equation,
    /// What solving it must give.
    pub expected: Answer,
}

impl TestCase {
    /// A new test case.
    #[inline]
    pub const fn new(equation: Equation, expected: Answer) -> TestCase {
        TestCase { equation, expected }
    }
}

const fn case(a: f64, b: f64, c: f64, expected: Answer) -> TestCase {
    TestCase::new(Equation::new(a, b, c), expected)
}

/// Hand-checked cases. Irrational roots are the nearest doubles to the
/// exact values.
const BUILTIN: &[TestCase] = &[
    // Constant equations.
    case(0.0, 0.0, 0.0, Answer::InfiniteRoots),
    case(0.0, 0.0, 5.0, Answer::NoRoots),
    case(0.0, 0.0, -1e-12, Answer::InfiniteRoots),
    // Linear equations.
    case(0.0, 2.0, -4.0, Answer::OneRoot(2.0)),
    case(0.0, -3.0, 0.0, Answer::OneRoot(0.0)),
    case(0.0, 4.0, 1.0, Answer::OneRoot(-0.25)),
    case(1e-12, 2.0, -4.0, Answer::OneRoot(2.0)),
    // Negative discriminant.
    case(1.0, 0.0, 1.0, Answer::NoRoots),
    case(1.0, 1.0, 1.0, Answer::NoRoots),
    case(-3.0, 1.0, -2.0, Answer::NoRoots),
    // Zero discriminant.
    case(1.0, 2.0, 1.0, Answer::OneRoot(-1.0)),
    case(1.0, 0.0, 0.0, Answer::OneRoot(0.0)),
    case(4.0, -4.0, 1.0, Answer::OneRoot(0.5)),
    case(-1.0, 2.0, -1.0, Answer::OneRoot(1.0)),
    // Positive discriminant.
    case(1.0, -3.0, 2.0, Answer::TwoRoots(1.0, 2.0)),
    case(1.0, 0.0, -4.0, Answer::TwoRoots(-2.0, 2.0)),
    case(-1.0, 0.0, 4.0, Answer::TwoRoots(-2.0, 2.0)),
    case(2.0, -4.0, 0.0, Answer::TwoRoots(0.0, 2.0)),
    case(-2.0, 3.0, 5.0, Answer::TwoRoots(-1.0, 2.5)),
    case(0.5, -2.5, 3.0, Answer::TwoRoots(2.0, 3.0)),
    case(3.0, 6.0, -9.0, Answer::TwoRoots(-3.0, 1.0)),
    case(2.0, 1.0, -1.0, Answer::TwoRoots(-1.0, 0.5)),
    case(
        1.0,
        0.0,
        -2.0,
        Answer::TwoRoots(-1.4142135623730951, 1.4142135623730951),
    ),
    case(
        1.0,
        -2.0,
        -1.0,
        Answer::TwoRoots(-0.41421356237309503, 2.414213562373095),
    ),
    case(
        1.0,
        -1.0,
        -1.0,
        Answer::TwoRoots(-0.6180339887498949, 1.618033988749895),
    ),
    // b dominates a and c.
    case(
        1.0,
        -100.0,
        1.0,
        Answer::TwoRoots(0.010001000200050014, 99.98999899979995),
    ),
    case(
        1e-3,
        1.0,
        -1.0,
        Answer::TwoRoots(-1000.9990019950139, 0.9990019950139581),
    ),
];

/// An ordered collection of [`TestCase`]s.
///
/// Cases are addressed by their index, starting at zero; the harness reports
/// failures by that index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    cases: Vec<TestCase>,
}

impl Catalog {
    /// A catalog of the given cases, in order.
    #[inline]
    pub fn new(cases: Vec<TestCase>) -> Catalog {
        Catalog { cases }
    }

    /// The catalog shipped with the crate.
    ///
    /// It covers every root count and both the linear and quadratic branches,
    /// including a few equations prone to cancellation error.
    pub fn builtin() -> Catalog {
        Catalog::new(BUILTIN.to_vec())
    }

    /// The number of cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Is the catalog empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The case at `index`, if there is one.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    /// Iterate over the cases in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// Append a case.
    #[inline]
    pub fn push(&mut self, case: TestCase) {
        self.cases.push(case);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TestCase;
    type IntoIter = slice::Iter<'a, TestCase>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TestCase> for Catalog {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Catalog {
        Catalog::new(iter.into_iter().collect())
    }
}

impl Extend<TestCase> for Catalog {
    fn extend<I: IntoIterator<Item = TestCase>>(&mut self, iter: I) {
        self.cases.extend(iter);
    }
}
