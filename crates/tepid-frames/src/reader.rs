//! Frame stream reader.
//!
//! [`FrameReader`] decodes snapshots from any `Read` source. The header is
//! validated on construction.

use std::io::Read;

use tepid_core::Snapshot;

use crate::codec::{decode_frame, decode_header};
use crate::error::FrameError;
use crate::types::FrameHeader;

/// Reads snapshots from a binary frame stream.
pub struct FrameReader<R: Read> {
    reader: R,
    header: FrameHeader,
    frames_read: u64,
}

impl<R: Read> FrameReader<R> {
    /// Open a stream, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, FrameError> {
        let header = decode_header(&mut reader)?;
        Ok(Self {
            reader,
            header,
            frames_read: 0,
        })
    }

    /// Header of the stream.
    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    /// Read the next snapshot, or `None` if the stream is exhausted.
    pub fn next_frame(&mut self) -> Result<Option<Snapshot>, FrameError> {
        let frame = decode_frame(&mut self.reader, &self.header)?;
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Convert into a snapshot iterator.
    pub fn frames(self) -> FrameIter<R> {
        FrameIter {
            reader: self.reader,
            header: self.header,
            done: false,
        }
    }
}

/// Iterator adapter over decoded snapshots.
///
/// Yields at most one error, then stops.
pub struct FrameIter<R: Read> {
    reader: R,
    header: FrameHeader,
    done: bool,
}

impl<R: Read> Iterator for FrameIter<R> {
    type Item = Result<Snapshot, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_frame(&mut self.reader, &self.header) {
            Ok(Some(snapshot)) => Some(Ok(snapshot)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SnapshotSink;
    use crate::writer::FrameWriter;
    use tepid_core::{Field, Iteration};

    fn recorded(iterations: &[u64]) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut w = FrameWriter::new(&mut buf, FrameHeader::new(2, 3, 2.0)).unwrap();
        for (n, &i) in iterations.iter().enumerate() {
            let terminal = n + 1 == iterations.len();
            w.record(&Snapshot::new(
                Iteration(i),
                terminal,
                Field::new(2, 3, i as f64),
            ))
            .unwrap();
        }
        drop(w);
        buf
    }

    #[test]
    fn iterates_all_frames_in_order() {
        let buf = recorded(&[0, 500, 1000, 1234]);
        let reader = FrameReader::open(buf.as_slice()).unwrap();
        assert_eq!(reader.header().shape(), (2, 3));
        let snaps: Vec<Snapshot> = reader.frames().collect::<Result<_, _>>().unwrap();
        let iterations: Vec<u64> = snaps.iter().map(|s| s.iteration().0).collect();
        assert_eq!(iterations, vec![0, 500, 1000, 1234]);
        assert!(snaps[3].is_final());
        assert!(!snaps[2].is_final());
        assert_eq!(snaps[1].field().get(1, 2), 500.0);
    }

    #[test]
    fn header_only_stream_is_empty() {
        let buf = recorded(&[]);
        let mut reader = FrameReader::open(buf.as_slice()).unwrap();
        assert!(reader.next_frame().unwrap().is_none());
        assert_eq!(reader.frames_read(), 0);
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut buf = recorded(&[0, 1]);
        buf.truncate(buf.len() - 1);
        let mut it = FrameReader::open(buf.as_slice()).unwrap().frames();
        assert!(it.next().unwrap().is_ok());
        assert!(it.next().unwrap().is_err());
        assert!(it.next().is_none());
    }
}
