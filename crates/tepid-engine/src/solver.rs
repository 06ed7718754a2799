//! The relaxation loop.
//!
//! [`Solver`] owns the two half-domain buffers, the precomputed stencil
//! and the convergence monitor. [`Solver::step`] runs one sweep and
//! classifies the result; [`Solver::run`] drives the loop to completion
//! and feeds snapshots to a [`SnapshotSink`].
//!
//! # Snapshot policy
//!
//! `run` records the state it starts from (iteration 0 for a fresh
//! solver), every iteration that is a multiple of `snapshot_interval`, and
//! the terminal iteration flagged as final. A terminal iteration that is
//! also on the interval is recorded once. Sink failures are logged and
//! counted; they never stop the loop.

use std::mem;
use std::time::Instant;

use tepid_core::{
    mirror_full, ConfigError, Field, FixedMask, Iteration, Plate, Snapshot, SolveError,
};
use tepid_frames::SnapshotSink;
use tepid_grid::build_grid;
use tepid_relax::Stencil;
use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::metrics::SolveMetrics;
use crate::monitor::{ConvergenceMonitor, Verdict};

/// Lifecycle of a [`Solver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Grid under construction. Only seen inside [`Solver::new`].
    Building,
    /// Ready for the next sweep.
    Relaxing,
    /// Sweep done, verdict pending. Only seen inside [`Solver::step`].
    Checking,
    /// Stopped below the tolerance.
    Converged,
    /// Stopped at the iteration cap.
    Exhausted,
    /// Final snapshot recorded and sink flushed.
    Done,
}

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Largest change dropped below the tolerance.
    Converged,
    /// Iteration cap reached first.
    Exhausted,
}

/// Result of [`Solver::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport {
    /// How the loop ended.
    pub outcome: Outcome,
    /// Number of sweeps performed.
    pub iterations: Iteration,
    /// Largest change in the last sweep.
    pub final_delta: f64,
    /// Geometry of the solved plate.
    pub plate: Plate,
    /// Final temperatures of the stored left half.
    pub field: Field,
    /// Timing and snapshot counters.
    pub metrics: SolveMetrics,
}

impl SolveReport {
    /// Whether the solve converged.
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }

    /// The final temperatures over the full plate.
    pub fn full_field(&self) -> Field {
        mirror_full(&self.field, self.plate.full_cols())
    }

    /// Treat exhaustion as an error.
    pub fn into_result(self) -> Result<Self, SolveError> {
        match self.outcome {
            Outcome::Converged => Ok(self),
            Outcome::Exhausted => Err(SolveError::NotConverged {
                iterations: self.iterations,
                delta: self.final_delta,
            }),
        }
    }
}

/// Jacobi solver for one plate configuration.
///
/// # Examples
///
/// ```
/// use tepid_engine::{Outcome, Solver, SolverConfig};
/// use tepid_frames::NullSink;
/// use tepid_grid::{BoundarySpec, PlateSpec};
///
/// let plate = PlateSpec {
///     domain_size: 1.0,
///     resolution: 9,
///     initial_guess: 0.0,
///     boundary: BoundarySpec::uniform(20.0),
///     hot_block: None,
/// };
/// let config = SolverConfig::for_plate(plate).with_tolerance(1e-6);
/// let mut solver = Solver::new(config).unwrap();
/// let report = solver.run(&mut NullSink);
/// assert_eq!(report.outcome, Outcome::Converged);
/// assert!(report.full_field().as_slice().iter().all(|t| (t - 20.0).abs() < 1e-3));
/// ```
pub struct Solver {
    plate: Plate,
    mask: FixedMask,
    stencil: Stencil,
    current: Field,
    scratch: Field,
    iteration: Iteration,
    last_delta: f64,
    monitor: ConvergenceMonitor,
    snapshot_interval: u64,
    report_interval: u64,
    phase: Phase,
    terminal: Option<Verdict>,
    metrics: SolveMetrics,
}

impl Solver {
    /// Validate `config` and build the initial grid.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        debug!(phase = ?Phase::Building, "building plate grid");
        config.validate()?;
        let grid = build_grid(&config.plate)?;
        let stencil = Stencil::new(&grid.plate, &grid.mask);
        debug!(
            rows = grid.plate.rows(),
            half_cols = grid.plate.half_cols(),
            free = stencil.free_cells(),
            "grid built"
        );
        Ok(Self {
            plate: grid.plate,
            mask: grid.mask,
            stencil,
            scratch: grid.field.clone(),
            current: grid.field,
            iteration: Iteration::ZERO,
            last_delta: f64::INFINITY,
            monitor: ConvergenceMonitor::new(config.tolerance, config.max_iterations),
            snapshot_interval: config.snapshot_interval,
            report_interval: config.report_interval,
            phase: Phase::Relaxing,
            terminal: None,
            metrics: SolveMetrics::default(),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sweeps completed so far.
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Largest change in the last sweep; infinite before the first.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    /// Plate geometry.
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    /// Fixed-cell mask of the stored half.
    pub fn mask(&self) -> &FixedMask {
        &self.mask
    }

    /// Current temperatures of the stored half.
    pub fn half_field(&self) -> &Field {
        &self.current
    }

    /// Counters collected so far.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }

    /// Mirror the current state into a full-domain snapshot.
    pub fn snapshot(&self, terminal: bool) -> Snapshot {
        Snapshot::from_half(self.iteration, terminal, &self.current, &self.plate)
    }

    /// Run one sweep and classify it.
    ///
    /// Once the solver has stopped this returns the terminal verdict
    /// again without sweeping.
    pub fn step(&mut self) -> Verdict {
        if let Some(verdict) = self.terminal {
            return verdict;
        }

        self.phase = Phase::Relaxing;
        let start = Instant::now();
        let delta = self.stencil.sweep_into(&self.current, &mut self.scratch);
        mem::swap(&mut self.current, &mut self.scratch);
        self.metrics.sweep_us += start.elapsed().as_micros() as u64;
        self.iteration = self.iteration.next();
        self.last_delta = delta;

        self.phase = Phase::Checking;
        let verdict = self.monitor.check(self.iteration, delta);
        self.phase = match verdict {
            Verdict::Continue => Phase::Relaxing,
            Verdict::Converged => Phase::Converged,
            Verdict::Exhausted => Phase::Exhausted,
        };
        if verdict.is_terminal() {
            self.terminal = Some(verdict);
        }
        verdict
    }

    /// Drive the loop to completion, recording snapshots into `sink`.
    ///
    /// Calling `run` again after it finished returns the same report and
    /// leaves the sink untouched.
    pub fn run<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> SolveReport {
        if self.phase == Phase::Done {
            return self.report();
        }

        let start = Instant::now();
        info!(
            rows = self.plate.rows(),
            cols = self.plate.full_cols(),
            free_cells = self.stencil.free_cells(),
            tolerance = self.monitor.tolerance(),
            max_iterations = self.monitor.max_iterations(),
            "starting solve"
        );

        if self.terminal.is_none() {
            self.record(sink, false);
        }
        loop {
            if self.step().is_terminal() {
                break;
            }
            if self.iteration.is_multiple_of(self.snapshot_interval) {
                self.record(sink, false);
            }
            if self.iteration.is_multiple_of(self.report_interval) {
                info!(iteration = %self.iteration, delta = self.last_delta, "relaxing");
            }
        }

        self.record(sink, true);
        if let Err(error) = sink.flush() {
            warn!(%error, "snapshot sink flush failed");
        }
        self.metrics.total_us += start.elapsed().as_micros() as u64;

        let report = self.report();
        match report.outcome {
            Outcome::Converged => info!(
                iterations = %report.iterations,
                delta = report.final_delta,
                "converged"
            ),
            Outcome::Exhausted => warn!(
                iterations = %report.iterations,
                delta = report.final_delta,
                tolerance = self.monitor.tolerance(),
                "iteration cap reached before convergence"
            ),
        }
        self.phase = Phase::Done;
        report
    }

    fn record<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S, terminal: bool) {
        let start = Instant::now();
        let snapshot = self.snapshot(terminal);
        match sink.record(&snapshot) {
            Ok(()) => {
                self.metrics.snapshots_written += 1;
                debug!(iteration = %self.iteration, terminal, "recorded snapshot");
            }
            Err(error) => {
                self.metrics.snapshot_failures += 1;
                warn!(iteration = %self.iteration, %error, "failed to record snapshot");
            }
        }
        self.metrics.snapshot_us += start.elapsed().as_micros() as u64;
    }

    fn report(&self) -> SolveReport {
        let outcome = match self.terminal {
            Some(Verdict::Converged) => Outcome::Converged,
            _ => Outcome::Exhausted,
        };
        SolveReport {
            outcome,
            iterations: self.iteration,
            final_delta: self.last_delta,
            plate: self.plate,
            field: self.current.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

/// Build a solver for `config` and run it into `sink`.
pub fn solve<S: SnapshotSink + ?Sized>(
    config: SolverConfig,
    sink: &mut S,
) -> Result<SolveReport, ConfigError> {
    Ok(Solver::new(config)?.run(sink))
}
