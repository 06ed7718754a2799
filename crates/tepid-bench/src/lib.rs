//! Benchmark profiles for the Tepid plate solver.
//!
//! - [`reference_profile`]: the full 241x241 reference problem
//! - [`coarse_profile`]: the reference problem at 61x61, quick enough to
//!   solve to convergence inside a benchmark loop
//! - [`capped_profile`]: any resolution, fixed sweep count, never converges

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tepid_engine::SolverConfig;
use tepid_grid::PlateSpec;

/// The reference problem with default loop settings.
pub fn reference_profile() -> SolverConfig {
    SolverConfig::default()
}

/// The reference problem on a 61x61 grid.
pub fn coarse_profile() -> SolverConfig {
    SolverConfig::for_plate(PlateSpec {
        resolution: 61,
        ..PlateSpec::reference()
    })
    .with_snapshot_interval(u64::MAX)
    .with_report_interval(0)
}

/// Reference plate at `resolution` points that runs exactly `sweeps`
/// iterations (zero tolerance).
pub fn capped_profile(resolution: usize, sweeps: u64) -> SolverConfig {
    SolverConfig::for_plate(PlateSpec {
        resolution,
        ..PlateSpec::reference()
    })
    .with_tolerance(0.0)
    .with_max_iterations(sweeps)
    .with_snapshot_interval(u64::MAX)
    .with_report_interval(0)
}
