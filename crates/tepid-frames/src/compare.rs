//! Snapshot comparison between two runs.
//!
//! Hash-first: matching hashes short-circuit. On mismatch the first
//! differing cell is located bit-exactly.

use std::io::Read;

use tepid_core::Snapshot;

use crate::error::FrameError;
use crate::hash::snapshot_hash;
use crate::reader::FrameReader;

/// What differed between a recorded and a replayed snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum DivergenceKind {
    /// Snapshots were taken at different iterations.
    Iteration {
        /// Recorded iteration.
        recorded: u64,
        /// Replayed iteration.
        replayed: u64,
    },
    /// Exactly one side carried the final flag.
    FinalFlag,
    /// Grids have different dimensions.
    Shape {
        /// Recorded `(rows, cols)`.
        recorded: (usize, usize),
        /// Replayed `(rows, cols)`.
        replayed: (usize, usize),
    },
    /// First cell whose bits differ, in row-major order.
    Cell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Value from the recording.
        recorded: f64,
        /// Value from the replay.
        replayed: f64,
    },
    /// One sequence ran out before the other.
    Length {
        /// Number of recorded snapshots.
        recorded: usize,
        /// Number of replayed snapshots.
        replayed: usize,
    },
}

/// The first divergence found in a sequence comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport {
    /// Position in the sequence (0-based).
    pub index: usize,
    /// What differed.
    pub kind: DivergenceKind,
}

/// Compare two snapshots. `None` means bit-identical.
pub fn compare_snapshot(recorded: &Snapshot, replayed: &Snapshot) -> Option<DivergenceKind> {
    if snapshot_hash(recorded) == snapshot_hash(replayed) && recorded == replayed {
        return None;
    }
    if recorded.iteration() != replayed.iteration() {
        return Some(DivergenceKind::Iteration {
            recorded: recorded.iteration().0,
            replayed: replayed.iteration().0,
        });
    }
    if recorded.is_final() != replayed.is_final() {
        return Some(DivergenceKind::FinalFlag);
    }
    let (a, b) = (recorded.field(), replayed.field());
    if !a.same_shape(b) {
        return Some(DivergenceKind::Shape {
            recorded: (a.rows(), a.cols()),
            replayed: (b.rows(), b.cols()),
        });
    }
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .position(|(x, y)| x.to_bits() != y.to_bits())
        .map(|i| DivergenceKind::Cell {
            row: i / a.cols(),
            col: i % a.cols(),
            recorded: a.as_slice()[i],
            replayed: b.as_slice()[i],
        })
}

/// Find the first divergence between two snapshot sequences.
pub fn first_divergence(recorded: &[Snapshot], replayed: &[Snapshot]) -> Option<DivergenceReport> {
    for (index, (rec, rep)) in recorded.iter().zip(replayed).enumerate() {
        if let Some(kind) = compare_snapshot(rec, rep) {
            return Some(DivergenceReport { index, kind });
        }
    }
    if recorded.len() != replayed.len() {
        return Some(DivergenceReport {
            index: recorded.len().min(replayed.len()),
            kind: DivergenceKind::Length {
                recorded: recorded.len(),
                replayed: replayed.len(),
            },
        });
    }
    None
}

/// Stream a recording and compare it against snapshots from a fresh run.
///
/// Stops at the first divergence; decode errors are propagated.
pub fn compare_recording<R: Read>(
    reader: FrameReader<R>,
    replayed: &[Snapshot],
) -> Result<Option<DivergenceReport>, FrameError> {
    let mut count = 0;
    for (index, frame) in reader.frames().enumerate() {
        let recorded = frame?;
        count = index + 1;
        // Frames past the end of `replayed` are still read so the length
        // report carries the full recorded count.
        if let Some(kind) = replayed
            .get(index)
            .and_then(|rep| compare_snapshot(&recorded, rep))
        {
            return Ok(Some(DivergenceReport { index, kind }));
        }
    }
    if count != replayed.len() {
        return Ok(Some(DivergenceReport {
            index: count.min(replayed.len()),
            kind: DivergenceKind::Length {
                recorded: count,
                replayed: replayed.len(),
            },
        }));
    }
    Ok(None)
}
