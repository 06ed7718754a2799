//! Frame stream writer.
//!
//! [`FrameWriter`] streams snapshots to any `Write` destination using the
//! binary frame format. The header is written immediately on construction.

use std::io::Write;

use tepid_core::Snapshot;
use tracing::debug;

use crate::codec::{encode_frame, encode_header};
use crate::error::FrameError;
use crate::sink::{SequenceCheck, SnapshotSink};
use crate::types::FrameHeader;

/// Writes snapshots as binary frames.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use tepid_core::{Field, Iteration, Snapshot};
/// use tepid_frames::{FrameHeader, FrameReader, FrameWriter, SnapshotSink};
///
/// let mut buf = Vec::new();
/// let mut writer = FrameWriter::new(&mut buf, FrameHeader::new(2, 2, 1.0)).unwrap();
/// for (i, terminal) in [(0, false), (7, true)] {
///     let snap = Snapshot::new(Iteration(i), terminal, Field::new(2, 2, i as f64));
///     writer.record(&snap).unwrap();
/// }
/// assert_eq!(writer.frames_written(), 2);
/// drop(writer);
///
/// let mut reader = FrameReader::open(buf.as_slice()).unwrap();
/// let first = reader.next_frame().unwrap().unwrap();
/// assert_eq!(first.iteration(), Iteration(0));
/// let last = reader.next_frame().unwrap().unwrap();
/// assert!(last.is_final());
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct FrameWriter<W: Write> {
    writer: W,
    header: FrameHeader,
    sequence: SequenceCheck,
    frames_written: u64,
}

impl<W: Write> FrameWriter<W> {
    /// Create a new frame writer, immediately writing the header.
    pub fn new(mut writer: W, header: FrameHeader) -> Result<Self, FrameError> {
        encode_header(&mut writer, &header)?;
        Ok(Self {
            writer,
            header,
            sequence: SequenceCheck::default(),
            frames_written: 0,
        })
    }

    /// The header this stream was opened with.
    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the writer and return the underlying destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for FrameWriter<W> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), FrameError> {
        let field = snapshot.field();
        let expected = self.header.shape();
        if (field.rows(), field.cols()) != expected {
            return Err(FrameError::ShapeMismatch {
                expected,
                found: (field.rows(), field.cols()),
            });
        }
        self.sequence.advance(snapshot.iteration())?;
        encode_frame(&mut self.writer, snapshot)?;
        self.frames_written += 1;
        debug!(iteration = %snapshot.iteration(), "encoded frame");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), FrameError> {
        self.writer.flush()?;
        Ok(())
    }
}
