//! Error types for the Tepid solver.
//!
//! [`ConfigError`] covers everything detected before the first sweep;
//! [`SolveError`] is what a caller gets when it asks for a converged
//! result and the iteration cap ran out first. Snapshot I/O errors live
//! in `tepid-frames` and never reach the numeric loop.

use std::error::Error;
use std::fmt;

use crate::id::Iteration;

/// Errors detected while validating a plate or solver configuration.
///
/// All of these are fatal and raised before any iteration runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Domain size is NaN, infinite, zero or negative.
    InvalidDomainSize {
        /// The rejected value.
        value: f64,
    },
    /// Grid resolution is below the minimum of 3 points per side.
    ResolutionTooSmall {
        /// The configured resolution.
        resolution: usize,
    },
    /// A temperature (initial guess, block or profile value) is not finite.
    NonFiniteTemperature {
        /// Which setting carried the value.
        what: String,
        /// The rejected value.
        value: f64,
    },
    /// An edge profile is undefined or malformed.
    InvalidProfile {
        /// Edge the profile was attached to.
        edge: String,
        /// What is wrong with it.
        reason: String,
    },
    /// The hot block is larger than the domain.
    BlockExceedsDomain {
        /// Block side length.
        side: f64,
        /// Domain side length.
        domain_size: f64,
    },
    /// The hot block covers a cell that also belongs to a boundary edge.
    BlockOverlapsBoundary {
        /// The boundary edge the block reaches.
        edge: String,
    },
    /// The hot block geometry is malformed (negative or non-finite size or
    /// centre).
    InvalidBlock {
        /// Description of the problem.
        reason: String,
    },
    /// Convergence tolerance is NaN, infinite or negative.
    InvalidTolerance {
        /// The rejected value.
        value: f64,
    },
    /// The iteration cap is zero.
    ZeroIterationCap,
    /// The snapshot interval is zero.
    ZeroSnapshotInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomainSize { value } => {
                write!(f, "domain_size must be finite and positive, got {value}")
            }
            Self::ResolutionTooSmall { resolution } => {
                write!(f, "resolution {resolution} is below minimum of 3")
            }
            Self::NonFiniteTemperature { what, value } => {
                write!(f, "{what} must be finite, got {value}")
            }
            Self::InvalidProfile { edge, reason } => {
                write!(f, "invalid {edge} profile: {reason}")
            }
            Self::BlockExceedsDomain { side, domain_size } => {
                write!(f, "hot block side {side} exceeds domain size {domain_size}")
            }
            Self::BlockOverlapsBoundary { edge } => {
                write!(f, "hot block overlaps the {edge} boundary")
            }
            Self::InvalidBlock { reason } => write!(f, "invalid hot block: {reason}"),
            Self::InvalidTolerance { value } => {
                write!(f, "tolerance must be finite and >= 0, got {value}")
            }
            Self::ZeroIterationCap => write!(f, "max_iterations must be at least 1"),
            Self::ZeroSnapshotInterval => write!(f, "snapshot_interval must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors surfaced by a finished solve.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Configuration was rejected before any iteration.
    Config(ConfigError),
    /// The iteration cap was reached before the tolerance was met.
    NotConverged {
        /// Iterations performed.
        iterations: Iteration,
        /// Max absolute change of the last sweep.
        delta: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NotConverged { iterations, delta } => {
                write!(
                    f,
                    "not converged after {iterations} iterations (max change {delta:e})"
                )
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::NotConverged { .. } => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
