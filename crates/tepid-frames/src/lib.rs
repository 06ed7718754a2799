//! Snapshot sinks and frame codecs for the Tepid plate solver.
//!
//! The solver hands every recorded [`tepid_core::Snapshot`] to a
//! [`SnapshotSink`]. This crate provides the sinks and the formats they
//! write.
//!
//! # Architecture
//!
//! - [`CsvSnapshotWriter`] writes one structured-grid CSV per snapshot
//! - [`FrameWriter`] streams snapshots into a compact binary format
//! - [`FrameReader`] plays a binary stream back
//! - [`first_divergence`] and [`compare_recording`] check two runs for
//!   bit-exact agreement
//!
//! # Format
//!
//! ```text
//! [MAGIC "TEPD"] [VERSION u8] [FrameHeader]
//! [Frame 1] [Frame 2] ... [Frame N]
//! ```
//!
//! Each frame carries the iteration, a final flag and the full grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod csv;
pub mod error;
pub mod hash;
pub mod reader;
pub mod sink;
pub mod types;
pub mod writer;

pub use compare::{
    compare_recording, compare_snapshot, first_divergence, DivergenceKind, DivergenceReport,
};
pub use csv::{write_structured_csv, CsvSnapshotWriter, CSV_HEADER};
pub use error::FrameError;
pub use hash::{field_hash, snapshot_hash};
pub use reader::{FrameIter, FrameReader};
pub use sink::{NullSink, SequenceCheck, SnapshotSink};
pub use types::FrameHeader;
pub use writer::FrameWriter;

/// Magic bytes at the start of every frame stream.
pub const MAGIC: [u8; 4] = *b"TEPD";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
