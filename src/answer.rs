// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use arrayvec::ArrayVec;

/// How many real roots an equation has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootCount {
    /// No real root.
    None,
    /// Exactly one root.
    One,
    /// Two distinct roots.
    Two,
    /// Every real number is a root.
    Infinite,
}

impl fmt::Display for RootCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RootCount::None => "no roots",
            RootCount::One => "one root",
            RootCount::Two => "two roots",
            RootCount::Infinite => "infinitely many roots",
        })
    }
}

/// The solution set of an [`Equation`](crate::Equation).
///
/// A [`TwoRoots`](Answer::TwoRoots) answer produced by this crate always has
/// its roots in strictly ascending order; a repeated root is reported as
/// [`OneRoot`](Answer::OneRoot).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Answer {
    /// No real solution.
    NoRoots,
    /// A single solution.
    OneRoot(f64),
    /// Two solutions, smaller first.
    TwoRoots(f64, f64),
    /// Every real number is a solution (the equation is `0 = 0`).
    InfiniteRoots,
}

impl Answer {
    /// The number of roots.
    #[inline]
    pub fn count(&self) -> RootCount {
        match self {
            Answer::NoRoots => RootCount::None,
            Answer::OneRoot(_) => RootCount::One,
            Answer::TwoRoots(..) => RootCount::Two,
            Answer::InfiniteRoots => RootCount::Infinite,
        }
    }

    /// The first (smaller) root, if the answer has finitely many.
    #[inline]
    pub fn root1(&self) -> Option<f64> {
        match *self {
            Answer::OneRoot(x) | Answer::TwoRoots(x, _) => Some(x),
            Answer::NoRoots | Answer::InfiniteRoots => None,
        }
    }

    /// The second (larger) root.
    ///
    /// A single root occupies both slots, so this returns it too; that lets
    /// answers be compared slot by slot regardless of their count.
    #[inline]
    pub fn root2(&self) -> Option<f64> {
        match *self {
            Answer::OneRoot(x) | Answer::TwoRoots(_, x) => Some(x),
            Answer::NoRoots | Answer::InfiniteRoots => None,
        }
    }

    /// The distinct roots, in order.
    ///
    /// Empty for both [`NoRoots`](Answer::NoRoots) and
    /// [`InfiniteRoots`](Answer::InfiniteRoots); use [`count`](Answer::count)
    /// to tell them apart.
    pub fn roots(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        match *self {
            Answer::OneRoot(x) => result.push(x),
            Answer::TwoRoots(x1, x2) => {
                result.push(x1);
                result.push(x2);
            }
            Answer::NoRoots | Answer::InfiniteRoots => (),
        }
        result
    }

    /// Whether a two-root answer has its roots strictly ascending.
    ///
    /// Answers with any other count are trivially in canonical form.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        match *self {
            Answer::TwoRoots(x1, x2) => x1 < x2,
            _ => true,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Answer::NoRoots => write!(f, "No roots"),
            Answer::InfiniteRoots => write!(f, "Any number is a root"),
            Answer::OneRoot(x) => {
                write!(f, "One root: x = ")?;
                fmt::Display::fmt(&x, f)
            }
            Answer::TwoRoots(x1, x2) => {
                write!(f, "Two roots: x1 = ")?;
                fmt::Display::fmt(&x1, f)?;
                write!(f, ", x2 = ")?;
                fmt::Display::fmt(&x2, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_root_fills_both_slots() {
        let ans = Answer::OneRoot(-1.5);
        assert_eq!(ans.root1(), Some(-1.5));
        assert_eq!(ans.root2(), Some(-1.5));
        assert_eq!(ans.roots().as_slice(), &[-1.5]);
        assert_eq!(ans.count(), RootCount::One);
    }

    #[test]
    fn no_slots_without_finite_roots() {
        for ans in [Answer::NoRoots, Answer::InfiniteRoots] {
            assert_eq!(ans.root1(), None);
            assert_eq!(ans.root2(), None);
            assert!(ans.roots().is_empty());
        }
        assert_ne!(Answer::NoRoots.count(), Answer::InfiniteRoots.count());
    }

    #[test]
    fn canonical_order() {
        assert!(Answer::TwoRoots(1.0, 2.0).is_canonical());
        assert!(!Answer::TwoRoots(2.0, 1.0).is_canonical());
        assert!(!Answer::TwoRoots(1.0, 1.0).is_canonical());
        assert!(Answer::OneRoot(3.0).is_canonical());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Answer::NoRoots), "No roots");
        assert_eq!(format!("{}", Answer::InfiniteRoots), "Any number is a root");
        assert_eq!(format!("{}", Answer::OneRoot(2.0)), "One root: x = 2");
        assert_eq!(
            format!("{:.1}", Answer::TwoRoots(1.0, 2.26)),
            "Two roots: x1 = 1.0, x2 = 2.3"
        );
        assert_eq!(format!("{}", RootCount::Two), "two roots");
    }
}
