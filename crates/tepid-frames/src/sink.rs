//! The [`SnapshotSink`] trait.
//!
//! A sink is the boundary between the solver and durable storage: it
//! accepts full-domain snapshots in strictly increasing iteration order
//! and persists them however it likes.

use tepid_core::{Iteration, Snapshot};

use crate::error::FrameError;

/// Destination for recorded snapshots.
///
/// # Contract
///
/// - `record()` is called with strictly increasing iterations.
/// - A failed `record()` must not corrupt earlier snapshots; the caller
///   may keep recording after an error.
/// - `flush()` is called once after the final snapshot.
pub trait SnapshotSink {
    /// Persist one snapshot.
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError>;

    /// Flush buffered output. Default: no-op.
    fn flush(&mut self) -> Result<(), FrameError> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        (**self).record(snapshot)
    }

    fn flush(&mut self) -> Result<(), FrameError> {
        (**self).flush()
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        (**self).record(snapshot)
    }

    fn flush(&mut self) -> Result<(), FrameError> {
        (**self).flush()
    }
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _snapshot: &Snapshot) -> Result<(), FrameError> {
        Ok(())
    }
}

/// Tracks the last accepted iteration and rejects anything not after it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceCheck {
    last: Option<Iteration>,
}

impl SequenceCheck {
    /// Accept `iteration` if it is strictly after the last accepted one.
    pub fn advance(&mut self, iteration: Iteration) -> Result<(), FrameError> {
        if let Some(last) = self.last {
            if iteration <= last {
                return Err(FrameError::OutOfOrder {
                    last: last.0,
                    found: iteration.0,
                });
            }
        }
        self.last = Some(iteration);
        Ok(())
    }

    /// The last accepted iteration.
    pub fn last(&self) -> Option<Iteration> {
        self.last
    }
}
