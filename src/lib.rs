// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic equations, solved carefully.
//!
//! The quadsolve library classifies and solves equations of the form
//! `a·x² + b·x + c = 0`, including the degenerate linear (`a = 0`) and
//! constant (`a = b = 0`) forms. Every "is this zero" decision goes through a
//! single epsilon comparator, and the two-root case uses the numerically
//! stable form of the quadratic formula to avoid catastrophic cancellation.
//!
//! A small test harness ships alongside the solver: a built-in catalog of
//! hand-authored equations with their expected answers, a self-consistency
//! check for that catalog, and a runner that checks any [`Solver`] against it.
//!
//! # Examples
//!
//! Solving an equation:
//! ```
//! use quadsolve::{Answer, Equation};
//!
//! let eq = Equation::new(1.0, -3.0, 2.0);
//! assert_eq!(eq.solve(), Answer::TwoRoots(1.0, 2.0));
//!
//! // 0·x² + 0·x + 5 = 0 has no solution at all.
//! assert_eq!(Equation::new(0.0, 0.0, 5.0).solve(), Answer::NoRoots);
//! ```
//!
//! Vertex helpers are only reachable once the equation is known to be
//! quadratic:
//! ```
//! use quadsolve::Equation;
//!
//! let parabola = Equation::new(1.0, -2.0, -3.0).as_quadratic().unwrap();
//! assert_eq!(parabola.vertex_x(), 1.0);
//! assert_eq!(parabola.vertex_y(), -4.0);
//!
//! assert!(Equation::new(0.0, 2.0, 1.0).as_quadratic().is_none());
//! ```
//!
//! Checking a solver against the built-in catalog:
//! ```
//! use quadsolve::{harness, Catalog, StandardSolver};
//!
//! let catalog = Catalog::builtin();
//! harness::validate(&catalog).unwrap();
//! harness::run(&catalog, &StandardSolver::default()).unwrap();
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `cli` feature
//! (also on by default) builds the `quadsolve` binary and its supporting
//! [`cli`] module.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::many_single_char_names,
    reason = "coefficient names follow the textbook a, b, c"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quadsolve requires either the `std` or `libm` feature");

extern crate alloc;

mod answer;
mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod common;
mod epsilon;
mod equation;
pub mod harness;
mod solve;

pub use crate::answer::*;
pub use crate::catalog::*;
pub use crate::epsilon::*;
pub use crate::equation::*;
pub use crate::solve::*;
