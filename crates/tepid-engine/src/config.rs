//! Solver configuration.
//!
//! [`SolverConfig`] wraps the physical [`PlateSpec`] with the numeric
//! controls of the loop. [`SolverConfig::validate`] checks every field
//! before a solver is built; invalid settings never reach the sweep.

use tepid_core::ConfigError;
use tepid_grid::PlateSpec;

/// Everything a [`Solver`](crate::Solver) needs, read once at construction.
///
/// [`Default`] is the reference problem with the documented loop settings.
///
/// # Examples
///
/// ```
/// use tepid_engine::SolverConfig;
///
/// let cfg = SolverConfig::default();
/// assert_eq!(cfg.tolerance, 1e-3);
/// assert_eq!(cfg.max_iterations, 2_000_000);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Plate geometry, boundary conditions and hot block.
    pub plate: PlateSpec,
    /// Converged once the largest per-sweep change drops strictly below
    /// this value. Must be finite and non-negative.
    pub tolerance: f64,
    /// Hard cap on sweeps. Must be at least 1.
    pub max_iterations: u64,
    /// Record a snapshot every this many iterations. Must be at least 1.
    pub snapshot_interval: u64,
    /// Log progress every this many iterations. Zero disables progress
    /// lines; the start and end of a run are always logged.
    pub report_interval: u64,
}

impl SolverConfig {
    /// Default convergence tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-3;
    /// Default iteration cap.
    pub const DEFAULT_MAX_ITERATIONS: u64 = 2_000_000;
    /// Default snapshot and progress interval.
    pub const DEFAULT_INTERVAL: u64 = 500;

    /// Default loop settings around a custom plate.
    pub fn for_plate(plate: PlateSpec) -> Self {
        Self {
            plate,
            ..Self::default()
        }
    }

    /// Set the tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the snapshot interval.
    pub fn with_snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Set the progress-log interval.
    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval;
        self
    }

    /// Check the loop settings, then the plate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationCap);
        }
        if self.snapshot_interval == 0 {
            return Err(ConfigError::ZeroSnapshotInterval);
        }
        self.plate.resolve().map(|_| ())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            plate: PlateSpec::reference(),
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            snapshot_interval: Self::DEFAULT_INTERVAL,
            report_interval: Self::DEFAULT_INTERVAL,
        }
    }
}
