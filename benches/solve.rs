#![feature(test)]
extern crate test;
use quadsolve::harness::{self, Harness};
use quadsolve::{solve, Catalog, Equation, StandardSolver};
use test::Bencher;

#[bench]
fn bench_solve_two_roots(bb: &mut Bencher) {
    let eq = Equation::new(1.0, -3.0, 2.0);
    bb.iter(|| solve(test::black_box(&eq)))
}

#[bench]
fn bench_solve_cancellation(bb: &mut Bencher) {
    let eq = Equation::new(1.0, 1e8, 1.0);
    bb.iter(|| solve(test::black_box(&eq)))
}

#[bench]
fn bench_solve_linear(bb: &mut Bencher) {
    let eq = Equation::new(0.0, 2.0, -4.0);
    bb.iter(|| test::black_box(&eq).solve())
}

#[bench]
fn bench_validate_catalog(bb: &mut Bencher) {
    let catalog = Catalog::builtin();
    bb.iter(|| harness::validate(test::black_box(&catalog)))
}

#[bench]
fn bench_run_catalog(bb: &mut Bencher) {
    let catalog = Catalog::builtin();
    let solver = StandardSolver::default();
    let harness = Harness::new(catalog, &solver);
    bb.iter(|| test::black_box(&harness).run())
}
