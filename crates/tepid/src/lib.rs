//! Tepid: steady-state temperature of a square plate by Jacobi relaxation.
//!
//! A square plate has prescribed temperatures on its bottom, top and side
//! edges and an optional hot block on its vertical centre line. Because
//! the problem is symmetric about that line only the left half is stored
//! and relaxed; snapshots are mirrored to the full plate on the way out.
//!
//! This is the facade crate that re-exports the public API of the Tepid
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tepid::prelude::*;
//!
//! let plate = PlateSpec {
//!     domain_size: 4.0,
//!     resolution: 5,
//!     initial_guess: 50.0,
//!     boundary: BoundarySpec::uniform(0.0),
//!     hot_block: Some(HotBlock::centered(0.0, 100.0, 4.0)),
//! };
//! let config = SolverConfig::for_plate(plate)
//!     .with_tolerance(1e-2)
//!     .with_max_iterations(1000);
//!
//! let mut solver = Solver::new(config).unwrap();
//! let report = solver.run(&mut NullSink);
//! assert_eq!(report.outcome, Outcome::Converged);
//!
//! let full = report.full_field();
//! assert_eq!(full.get(2, 2), 100.0);
//! assert_eq!(full.get(1, 1), full.get(1, 3));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tepid-core` | Fields, masks, plate geometry, symmetry helpers, errors |
//! | [`grid`] | `tepid-grid` | Plate specification, edge profiles, hot block, grid builder |
//! | [`relax`] | `tepid-relax` | The Jacobi sweep |
//! | [`engine`] | `tepid-engine` | Solver configuration, convergence monitor, solve loop |
//! | [`frames`] | `tepid-frames` | Snapshot sinks: CSV series and binary frame streams |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data types and errors (`tepid-core`).
pub use tepid_core as types;

/// Plate specification and grid construction (`tepid-grid`).
pub use tepid_grid as grid;

/// The Jacobi sweep over the stored half (`tepid-relax`).
pub use tepid_relax as relax;

/// The solve loop (`tepid-engine`).
///
/// [`engine::Solver`] for stepping or running a configuration,
/// [`engine::solve`] for the one-call form.
pub use tepid_engine as engine;

/// Snapshot sinks and the binary frame format (`tepid-frames`).
pub use tepid_frames as frames;

/// Common imports for typical Tepid usage.
///
/// ```rust
/// use tepid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tepid_core::{Field, FixedMask, Iteration, Plate, Snapshot};

    // Errors
    pub use tepid_core::{ConfigError, SolveError};
    pub use tepid_frames::FrameError;

    // Plate description
    pub use tepid_grid::{BoundarySpec, EdgeProfile, HotBlock, PlateSpec};

    // Engine
    pub use tepid_engine::{
        solve, Outcome, SolveMetrics, SolveReport, Solver, SolverConfig, Verdict,
    };

    // Sinks
    pub use tepid_frames::{CsvSnapshotWriter, FrameReader, FrameWriter, NullSink, SnapshotSink};
}
