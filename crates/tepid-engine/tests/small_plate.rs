//! Integration test: end-to-end solves on small plates.
//!
//! Runs the full build → sweep → check → record pipeline and checks the
//! physical and bookkeeping properties of the result: symmetry, bounds,
//! fixed-cell invariance, determinism and snapshot ordering.

use tepid_core::{mirror_col, Iteration};
use tepid_engine::{Outcome, Solver, SolverConfig};
use tepid_frames::{first_divergence, snapshot_hash};
use tepid_test_utils::fixtures::{bare_plate, five_by_five, ramped_walls, reference_coarse};
use tepid_test_utils::MemorySink;

fn five_by_five_config() -> SolverConfig {
    SolverConfig::for_plate(five_by_five())
        .with_tolerance(1e-2)
        .with_max_iterations(1000)
        .with_snapshot_interval(10)
}

#[test]
fn five_by_five_converges_symmetric_and_bounded() {
    let mut sink = MemorySink::new();
    let report = Solver::new(five_by_five_config()).unwrap().run(&mut sink);

    assert_eq!(report.outcome, Outcome::Converged);
    assert!(report.final_delta < 1e-2);
    assert!(report.iterations.0 <= 1000);

    let full = report.full_field();
    assert_eq!((full.rows(), full.cols()), (5, 5));
    for r in 0..5 {
        for c in 0..5 {
            let t = full.get(r, c);
            assert!((0.0..=100.0).contains(&t), "({r},{c}) = {t}");
            assert_eq!(t.to_bits(), full.get(r, mirror_col(c, 5)).to_bits());
        }
    }
    assert_eq!(full.get(2, 2), 100.0);
    assert_eq!(sink.last().unwrap().field(), &full);
}

#[test]
fn five_by_five_is_reproducible() {
    let run = || {
        let mut sink = MemorySink::new();
        Solver::new(five_by_five_config()).unwrap().run(&mut sink);
        sink.snapshots
    };
    let a = run();
    let b = run();
    assert_eq!(first_divergence(&a, &b), None);
    let hashes_a: Vec<u64> = a.iter().map(snapshot_hash).collect();
    let hashes_b: Vec<u64> = b.iter().map(snapshot_hash).collect();
    assert_eq!(hashes_a, hashes_b);
}

#[test]
fn zero_tolerance_exhausts_at_cap() {
    let cfg = five_by_five_config()
        .with_tolerance(0.0)
        .with_max_iterations(10);
    let mut sink = MemorySink::new();
    let report = Solver::new(cfg).unwrap().run(&mut sink);
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.iterations, Iteration(10));
    assert!(report.final_delta > 0.0);
    assert_eq!(sink.iterations(), vec![0, 10]);
    assert!(report.into_result().is_err());
}

#[test]
fn fixed_cells_never_change() {
    let cfg = SolverConfig::for_plate(ramped_walls(11))
        .with_tolerance(1e-4)
        .with_max_iterations(5000);
    let mut solver = Solver::new(cfg).unwrap();
    let initial = solver.half_field().clone();
    let mask = solver.mask().clone();
    for _ in 0..50 {
        solver.step();
        for r in 0..mask.rows() {
            for c in 0..mask.cols() {
                if mask.is_fixed(r, c) {
                    assert_eq!(solver.half_field().get(r, c), initial.get(r, c));
                }
            }
        }
    }
}

#[test]
fn uniform_boundary_relaxes_to_uniform_field() {
    let cfg = SolverConfig::for_plate(bare_plate(10, 37.0))
        .with_tolerance(1e-9)
        .with_max_iterations(100_000);
    let report = Solver::new(cfg).unwrap().run(&mut MemorySink::new());
    assert!(report.converged());
    for &t in report.full_field().as_slice() {
        assert!((t - 37.0).abs() < 1e-6, "{t}");
    }
}

#[test]
fn ramped_walls_approach_linear_profile() {
    // Top 40, bottom 0, walls ramp linearly: the harmonic solution is
    // T = 20 y on a plate of side 2.
    let cfg = SolverConfig::for_plate(ramped_walls(13))
        .with_tolerance(1e-10)
        .with_max_iterations(200_000);
    let mut solver = Solver::new(cfg).unwrap();
    let report = solver.run(&mut MemorySink::new());
    assert!(report.converged());
    let full = report.full_field();
    for r in 0..full.rows() {
        let expected = 20.0 * report.plate.y(r);
        for &t in full.row(r) {
            assert!((t - expected).abs() < 1e-6, "row {r}: {t} vs {expected}");
        }
    }
}

#[test]
fn coarse_reference_stays_between_extremes() {
    let cfg = SolverConfig::for_plate(reference_coarse()).with_snapshot_interval(100);
    let mut sink = MemorySink::new();
    let report = Solver::new(cfg).unwrap().run(&mut sink);
    assert!(report.converged());

    let (lo, hi) = report.full_field().min_max().unwrap();
    assert!(lo >= 32.0 && hi <= 212.0, "range {lo}..{hi}");

    // 25 points over 9 m: block rows/cols round(3/0.375)..=round(6/0.375)
    let full = report.full_field();
    assert_eq!(full.get(12, 12), 212.0);
    assert_eq!(full.get(8, 8), 212.0);
    assert_eq!(full.get(16, 16), 212.0);
    assert!(full.get(7, 12) < 212.0);
    assert_eq!(report.metrics.snapshots_written, sink.snapshots.len() as u64);
    assert_eq!(report.metrics.snapshot_failures, 0);
}
