//! Solver loop, convergence monitor and snapshot policy for Tepid.
//!
//! Ties the grid builder, the relaxation sweep and a snapshot sink into
//! a single synchronous loop:
//!
//! - [`SolverConfig`]: plate plus loop settings, validated up front
//! - [`ConvergenceMonitor`]: stop rule (tolerance first, then cap)
//! - [`Solver`]: owns the double buffer; `step()` sweeps once, `run()`
//!   loops to completion while recording snapshots
//! - [`SolveReport`]: outcome, final field and [`SolveMetrics`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod monitor;
pub mod solver;

pub use config::SolverConfig;
pub use metrics::SolveMetrics;
pub use monitor::{max_abs_delta, ConvergenceMonitor, Verdict};
pub use solver::{solve, Outcome, Phase, SolveReport, Solver};
