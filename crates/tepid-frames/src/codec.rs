//! Binary encode/decode for the frame stream format.
//!
//! All integers and floats are little-endian; strings are length-prefixed
//! with a `u32`. No compression, no alignment padding.
//!
//! ```text
//! [MAGIC "TEPD"] [VERSION u8] [producer str] [rows u32] [cols u32] [domain_size f64]
//! [Frame 1] [Frame 2] ... [Frame N]
//!
//! Frame: [iteration u64] [flags u8] [rows * cols f64]
//! ```
//!
//! Bit 0 of `flags` marks the final frame of a run.

use std::io::{ErrorKind, Read, Write};

use tepid_core::{Field, Iteration, Snapshot};

use crate::error::FrameError;
use crate::types::FrameHeader;
use crate::{FORMAT_VERSION, MAGIC};

const FLAG_FINAL: u8 = 0b0000_0001;

/// Upper bound on cells reserved up front when decoding a frame.
const MAX_PREALLOC_CELLS: usize = 1 << 16;

/// Number of `f64` values per frame, rejecting shapes whose payload
/// cannot be addressed in memory.
fn cell_count(header: &FrameHeader) -> Result<usize, FrameError> {
    (header.rows as usize)
        .checked_mul(header.cols as usize)
        .filter(|n| {
            n.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| FrameError::MalformedFrame {
            detail: format!(
                "frame shape {}x{} is too large to decode",
                header.rows, header.cols
            ),
        })
}

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), FrameError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), FrameError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), FrameError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), FrameError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), FrameError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, FrameError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, FrameError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, FrameError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, FrameError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| FrameError::MalformedFrame {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the stream header (magic, version, producer, grid shape).
pub fn encode_header(w: &mut dyn Write, header: &FrameHeader) -> Result<(), FrameError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_length_prefixed_str(w, &header.producer)?;
    write_u32_le(w, header.rows)?;
    write_u32_le(w, header.cols)?;
    write_f64_le(w, header.domain_size)?;
    Ok(())
}

/// Decode and validate the stream header.
pub fn decode_header(r: &mut dyn Read) -> Result<FrameHeader, FrameError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(FrameError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(FrameError::UnsupportedVersion { found: version });
    }

    let header = FrameHeader {
        producer: read_length_prefixed_str(r)?,
        rows: read_u32_le(r)?,
        cols: read_u32_le(r)?,
        domain_size: read_f64_le(r)?,
    };
    cell_count(&header)?;
    Ok(header)
}

// ── Frame encode/decode ─────────────────────────────────────────

/// Encode one snapshot as a frame.
///
/// The caller is responsible for checking the snapshot shape against the
/// header.
pub fn encode_frame(w: &mut dyn Write, snapshot: &Snapshot) -> Result<(), FrameError> {
    write_u64_le(w, snapshot.iteration().0)?;
    let flags = if snapshot.is_final() { FLAG_FINAL } else { 0 };
    write_u8(w, flags)?;
    for &v in snapshot.field().as_slice() {
        write_f64_le(w, v)?;
    }
    Ok(())
}

/// Decode the next frame, or `None` on a clean end of stream.
pub fn decode_frame(r: &mut dyn Read, header: &FrameHeader) -> Result<Option<Snapshot>, FrameError> {
    // Read the iteration byte-by-byte to tell a clean EOF (zero bytes)
    // from a truncated frame header.
    let mut iter_buf = [0u8; 8];
    let mut filled = 0;
    while filled < 8 {
        match r.read(&mut iter_buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(FrameError::MalformedFrame {
                    detail: format!("truncated frame header: got {filled} of 8 bytes"),
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FrameError::Io(e)),
        }
    }
    let iteration = Iteration(u64::from_le_bytes(iter_buf));

    let flags = read_u8(r)?;
    if flags & !FLAG_FINAL != 0 {
        return Err(FrameError::MalformedFrame {
            detail: format!("unknown frame flags {flags:#04x}"),
        });
    }

    let (rows, cols) = (header.rows as usize, header.cols as usize);
    let cells = cell_count(header)?;
    // The header is untrusted; grow from a bounded reservation so a bogus
    // shape fails on the first missing value instead of at allocation.
    let mut data = Vec::with_capacity(cells.min(MAX_PREALLOC_CELLS));
    for _ in 0..cells {
        let v = read_f64_le(r).map_err(|e| match e {
            FrameError::Io(io) if io.kind() == ErrorKind::UnexpectedEof => {
                FrameError::MalformedFrame {
                    detail: format!("truncated data in frame for iteration {iteration}"),
                }
            }
            other => other,
        })?;
        data.push(v);
    }
    let field = Field::from_vec(rows, cols, data).ok_or_else(|| FrameError::MalformedFrame {
        detail: "frame data does not match header shape".to_string(),
    })?;

    Ok(Some(Snapshot::new(
        iteration,
        flags & FLAG_FINAL != 0,
        field,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> FrameHeader {
        FrameHeader {
            producer: "test".into(),
            rows: 2,
            cols: 3,
            domain_size: 4.0,
        }
    }

    fn snapshot(iteration: u64, terminal: bool) -> Snapshot {
        let field = Field::from_vec(2, 3, vec![1.0, 2.0, 1.0, -3.5, 0.25, -3.5]).unwrap();
        Snapshot::new(Iteration(iteration), terminal, field)
    }

    #[test]
    fn header_preserves_shape() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &header()).unwrap();
        assert_eq!(&buf[..4], b"TEPD");
        assert_eq!(decode_header(&mut buf.as_slice()).unwrap(), header());
    }

    #[test]
    fn bad_magic_rejected() {
        let buf = b"NOPE\x01".to_vec();
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(FrameError::InvalidMagic)
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut buf = MAGIC.to_vec();
        buf.push(FORMAT_VERSION + 1);
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(FrameError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn frame_keeps_final_flag() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &snapshot(500, true)).unwrap();
        let mut r = buf.as_slice();
        let decoded = decode_frame(&mut r, &header()).unwrap().unwrap();
        assert_eq!(decoded, snapshot(500, true));
        assert!(decode_frame(&mut r, &header()).unwrap().is_none());
    }

    #[test]
    fn truncated_frame_is_malformed() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &snapshot(1, false)).unwrap();
        buf.truncate(buf.len() - 3);
        let err = decode_frame(&mut buf.as_slice(), &header()).unwrap_err();
        assert!(matches!(err, FrameError::MalformedFrame { .. }));

        let partial = [1u8, 0, 0];
        let err = decode_frame(&mut partial.as_slice(), &header()).unwrap_err();
        assert!(matches!(err, FrameError::MalformedFrame { .. }));
    }

    #[test]
    fn oversized_shape_is_malformed() {
        let huge = FrameHeader {
            producer: "test".into(),
            rows: u32::MAX,
            cols: u32::MAX,
            domain_size: 1.0,
        };
        // A frame prefix with no cell data behind it.
        let mut buf = Vec::new();
        write_u64_le(&mut buf, 7).unwrap();
        write_u8(&mut buf, 0).unwrap();
        let err = decode_frame(&mut buf.as_slice(), &huge).unwrap_err();
        assert!(matches!(err, FrameError::MalformedFrame { .. }));

        let mut stream = Vec::new();
        encode_header(&mut stream, &huge).unwrap();
        stream.extend_from_slice(&buf);
        let err = decode_header(&mut stream.as_slice()).unwrap_err();
        assert!(matches!(err, FrameError::MalformedFrame { .. }));
    }

    #[test]
    fn large_shape_with_short_data_is_malformed() {
        let tall = FrameHeader {
            producer: "test".into(),
            rows: 1 << 20,
            cols: 1 << 10,
            domain_size: 1.0,
        };
        let mut buf = Vec::new();
        write_u64_le(&mut buf, 3).unwrap();
        write_u8(&mut buf, 0).unwrap();
        write_f64_le(&mut buf, 1.5).unwrap();
        let err = decode_frame(&mut buf.as_slice(), &tall).unwrap_err();
        assert!(matches!(err, FrameError::MalformedFrame { .. }));
    }

    #[test]
    fn unknown_flags_rejected() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &snapshot(1, false)).unwrap();
        buf[8] = 0x80;
        assert!(decode_frame(&mut buf.as_slice(), &header()).is_err());
    }
}
