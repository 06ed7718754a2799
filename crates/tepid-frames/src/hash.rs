//! FNV-1a hashing of snapshots.
//!
//! Used for fast bit-exact equality checks between runs. Not
//! cryptographically secure.

use tepid_core::{Field, Snapshot};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the shape and every `f64::to_bits()` of a field.
///
/// The shape is folded in first so a 2x3 and a 3x2 field with the same
/// data hash differently.
pub fn field_hash(field: &Field) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, field.rows() as u64);
    hash = fnv1a_u64(hash, field.cols() as u64);
    for &v in field.as_slice() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}

/// Hash a snapshot: iteration, final flag, then the field.
pub fn snapshot_hash(snapshot: &Snapshot) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, snapshot.iteration().0);
    hash = fnv1a_byte(hash, snapshot.is_final() as u8);
    fnv1a_u64(hash, field_hash(snapshot.field()))
}
