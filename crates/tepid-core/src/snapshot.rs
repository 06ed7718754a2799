//! Immutable full-domain snapshots.

use crate::field::Field;
use crate::id::Iteration;
use crate::plate::Plate;
use crate::symmetry::mirror_full;

/// A read-only copy of the full (mirrored) temperature field.
///
/// Snapshots are produced by the solver and handed to a sink; they are
/// never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    iteration: Iteration,
    terminal: bool,
    field: Field,
}

impl Snapshot {
    /// Wrap an already full-width field.
    pub fn new(iteration: Iteration, terminal: bool, field: Field) -> Self {
        Self {
            iteration,
            terminal,
            field,
        }
    }

    /// Mirror a stored half field into a full-domain snapshot.
    pub fn from_half(iteration: Iteration, terminal: bool, half: &Field, plate: &Plate) -> Self {
        Self::new(iteration, terminal, mirror_full(half, plate.full_cols()))
    }

    /// Iteration at which the snapshot was taken.
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Whether this is the last snapshot of the run.
    pub fn is_final(&self) -> bool {
        self.terminal
    }

    /// The full-domain temperatures.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Consume the snapshot and return its field.
    pub fn into_field(self) -> Field {
        self.field
    }
}
