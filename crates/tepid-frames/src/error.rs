//! Error types for snapshot recording and playback.

use std::fmt;
use std::io;

/// Errors that can occur while persisting or reading snapshots.
#[derive(Debug)]
pub enum FrameError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with the expected `b"TEPD"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// A frame could not be decoded (truncated or corrupt data).
    MalformedFrame {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A snapshot does not match the dimensions the sink was opened with.
    ShapeMismatch {
        /// `(rows, cols)` the sink expects.
        expected: (usize, usize),
        /// `(rows, cols)` of the offending snapshot.
        found: (usize, usize),
    },
    /// A snapshot arrived out of iteration order.
    OutOfOrder {
        /// Iteration of the last accepted snapshot.
        last: u64,
        /// Iteration of the rejected snapshot.
        found: u64,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"TEPD\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedFrame { detail } => write!(f, "malformed frame: {detail}"),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "snapshot is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::OutOfOrder { last, found } => write!(
                f,
                "snapshot for iteration {found} arrived after iteration {last}"
            ),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FrameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
