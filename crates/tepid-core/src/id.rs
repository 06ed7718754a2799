//! Strongly-typed iteration counter.

use std::fmt;

/// Monotonically increasing relaxation iteration counter.
///
/// `Iteration(0)` is the freshly built grid; the solver increments the
/// counter once per completed sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iteration(pub u64);

impl Iteration {
    /// The post-build state, before any sweep.
    pub const ZERO: Iteration = Iteration(0);

    /// The iteration following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Whether this iteration falls on a multiple of `interval`.
    ///
    /// An `interval` of zero never matches.
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval != 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Iteration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(Iteration::ZERO.next(), Iteration(1));
        assert_eq!(Iteration(41).next(), Iteration(42));
    }

    #[test]
    fn multiple_of_interval() {
        assert!(Iteration(0).is_multiple_of(500));
        assert!(Iteration(1000).is_multiple_of(500));
        assert!(!Iteration(999).is_multiple_of(500));
        assert!(!Iteration(10).is_multiple_of(0));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Iteration(7).to_string(), "7");
    }
}
