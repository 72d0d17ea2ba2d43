// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers shared by the solver and the harness.

#![allow(missing_docs, reason = "helper trait mirrors inherent float methods")]

/// Picks between the libstd and libm implementations of the float methods
/// the solver needs.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("quadsolve requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn sqrt(self) -> Self => sqrt;
}

/// The largest absolute value among the coefficients.
///
/// Used to rescale an equation whose discriminant overflows; the roots of
/// `k·a·x² + k·b·x + k·c = 0` are the same for any nonzero `k`.
///
/// # Examples
///
/// ```
/// use quadsolve::common::max_magnitude;
///
/// assert_eq!(max_magnitude(1.0, -7.5, 3.0), 7.5);
/// assert_eq!(max_magnitude(0.0, 0.0, 0.0), 0.0);
/// ```
pub fn max_magnitude(a: f64, b: f64, c: f64) -> f64 {
    a.abs().max(b.abs()).max(c.abs())
}

#[cfg(test)]
mod tests {
    use crate::common::*;

    #[test]
    fn max_magnitude_ignores_sign() {
        assert_eq!(max_magnitude(-1e300, 2.0, 3.0), 1e300);
        assert_eq!(max_magnitude(0.5, -0.25, 0.125), 0.5);
    }
}
