//! Test fixtures and mock sinks for Tepid development.
//!
//! Provides in-memory [`SnapshotSink`] implementations and a handful of
//! small plate configurations that converge in a few hundred sweeps.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;
use std::io;

use tepid_core::{Iteration, Snapshot};
use tepid_frames::{FrameError, SnapshotSink};

/// Keeps every recorded snapshot in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub snapshots: Vec<Snapshot>,
    pub flushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterations of the recorded snapshots, in order.
    pub fn iterations(&self) -> Vec<u64> {
        self.snapshots.iter().map(|s| s.iteration().0).collect()
    }

    /// The last recorded snapshot, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

impl SnapshotSink for MemorySink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), FrameError> {
        self.flushes += 1;
        Ok(())
    }
}

/// Fails on selected iterations and records everything else.
///
/// Useful for checking that a write failure does not stop a solve.
#[derive(Clone, Debug, Default)]
pub struct FailingSink {
    fail_on: BTreeSet<u64>,
    pub recorded: MemorySink,
    pub failures: usize,
}

impl FailingSink {
    pub fn new(fail_on: impl IntoIterator<Item = u64>) -> Self {
        Self {
            fail_on: fail_on.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A sink that rejects every snapshot.
    pub fn always() -> AlwaysFailingSink {
        AlwaysFailingSink::default()
    }
}

impl SnapshotSink for FailingSink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        if self.fail_on.contains(&snapshot.iteration().0) {
            self.failures += 1;
            return Err(injected(snapshot.iteration()));
        }
        self.recorded.record(snapshot)
    }
}

/// Rejects every snapshot and every flush.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFailingSink {
    pub attempts: usize,
}

impl SnapshotSink for AlwaysFailingSink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        self.attempts += 1;
        Err(injected(snapshot.iteration()))
    }

    fn flush(&mut self) -> Result<(), FrameError> {
        Err(FrameError::Io(io::Error::other("injected flush failure")))
    }
}

fn injected(iteration: Iteration) -> FrameError {
    FrameError::Io(io::Error::other(format!(
        "injected failure at iteration {iteration}"
    )))
}
