// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The epsilon comparator.
//!
//! Every "is this zero" and "are these equal" question in the crate is
//! answered here, so that rounding error is absorbed the same way
//! everywhere.

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Magnitude below which a value is treated as exactly zero, unless a
/// different [`Epsilon`] is chosen.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// A comparison tolerance (ε).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epsilon {
    /// Values with an absolute magnitude strictly below this are zero.
    pub value: f64,
}

impl Default for Epsilon {
    #[inline]
    fn default() -> Epsilon {
        Self::DEFAULT
    }
}

impl Epsilon {
    /// The crate-wide default tolerance, [`DEFAULT_EPSILON`].
    pub const DEFAULT: Epsilon = Epsilon {
        value: DEFAULT_EPSILON,
    };

    /// A tolerance of `value`.
    ///
    /// `value` should be positive and finite; a zero tolerance degrades the
    /// comparator to raw float comparison.
    #[inline]
    pub const fn new(value: f64) -> Epsilon {
        Epsilon { value }
    }

    /// The sign of `x`, with anything closer to zero than this tolerance
    /// reported as [`Ordering::Equal`].
    ///
    /// NaN is never zero; it is reported as [`Ordering::Greater`].
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use quadsolve::Epsilon;
    ///
    /// let eps = Epsilon::new(1e-6);
    /// assert_eq!(eps.sign(-3.0), Ordering::Less);
    /// assert_eq!(eps.sign(1e-7), Ordering::Equal);
    /// assert_eq!(eps.sign(2e-6), Ordering::Greater);
    /// ```
    #[inline]
    pub fn sign(self, x: f64) -> Ordering {
        if x.abs() < self.value {
            Ordering::Equal
        } else if x < 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Whether `x` is zero under this tolerance.
    #[inline]
    pub fn is_zero(self, x: f64) -> bool {
        self.sign(x) == Ordering::Equal
    }

    /// Whether `x` and `y` are equal under this tolerance.
    #[inline]
    pub fn approx_eq(self, x: f64, y: f64) -> bool {
        self.is_zero(x - y)
    }
}

/// [`Epsilon::sign`] with the default tolerance.
#[inline]
pub fn sign(x: f64) -> Ordering {
    Epsilon::DEFAULT.sign(x)
}

/// [`Epsilon::approx_eq`] with the default tolerance.
#[inline]
pub fn approx_eq(x: f64, y: f64) -> bool {
    Epsilon::DEFAULT.approx_eq(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_absorbs_rounding() {
        assert_eq!(sign(0.1 + 0.2 - 0.3), Ordering::Equal);
        assert_eq!(sign(-0.0), Ordering::Equal);
        assert_eq!(sign(-DEFAULT_EPSILON), Ordering::Less);
        assert_eq!(sign(DEFAULT_EPSILON), Ordering::Greater);
        assert_eq!(sign(f64::INFINITY), Ordering::Greater);
        assert_eq!(sign(f64::NEG_INFINITY), Ordering::Less);
    }

    #[test]
    fn nan_is_not_zero() {
        assert_eq!(sign(f64::NAN), Ordering::Greater);
        assert!(!approx_eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn equality_is_sign_of_difference() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
        let loose = Epsilon::new(1e-3);
        assert!(loose.approx_eq(1.0, 1.0 + 1e-6));
        assert!(loose.is_zero(-5e-4));
    }
}
