//! Convergence monitoring.

use tepid_core::{Field, FixedMask, Iteration};

/// What the loop should do after a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Keep sweeping.
    Continue,
    /// Largest change fell below the tolerance.
    Converged,
    /// Iteration cap reached without converging.
    Exhausted,
}

impl Verdict {
    /// Whether the loop stops here.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Decides when the loop stops.
///
/// Convergence is tested before the cap, so a sweep that both reaches
/// the cap and drops below the tolerance counts as converged.
///
/// # Examples
///
/// ```
/// use tepid_core::Iteration;
/// use tepid_engine::{ConvergenceMonitor, Verdict};
///
/// let monitor = ConvergenceMonitor::new(1e-3, 10);
/// assert_eq!(monitor.check(Iteration(3), 0.5), Verdict::Continue);
/// assert_eq!(monitor.check(Iteration(3), 1e-4), Verdict::Converged);
/// assert_eq!(monitor.check(Iteration(10), 0.5), Verdict::Exhausted);
/// assert_eq!(monitor.check(Iteration(10), 1e-4), Verdict::Converged);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceMonitor {
    tolerance: f64,
    max_iterations: u64,
}

impl ConvergenceMonitor {
    /// Monitor with the given tolerance and iteration cap.
    pub fn new(tolerance: f64, max_iterations: u64) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Iteration cap.
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Classify the state after sweep number `iteration` whose largest
    /// change was `delta`.
    pub fn check(&self, iteration: Iteration, delta: f64) -> Verdict {
        if delta < self.tolerance {
            Verdict::Converged
        } else if iteration.0 >= self.max_iterations {
            Verdict::Exhausted
        } else {
            Verdict::Continue
        }
    }
}

/// Largest `|new - old|` over the free cells of `mask`.
///
/// Returns `0.0` when every cell is fixed.
///
/// # Panics
///
/// Panics if the three grids differ in shape.
pub fn max_abs_delta(old: &Field, new: &Field, mask: &FixedMask) -> f64 {
    assert!(
        old.same_shape(new) && mask.fits(old),
        "delta needs matching shapes: old {}x{}, new {}x{}, mask {}x{}",
        old.rows(),
        old.cols(),
        new.rows(),
        new.cols(),
        mask.rows(),
        mask.cols(),
    );
    old.as_slice()
        .iter()
        .zip(new.as_slice())
        .zip(mask.as_slice())
        .filter(|(_, fixed)| !**fixed)
        .map(|((a, b), _)| (b - a).abs())
        .fold(0.0, f64::max)
}
