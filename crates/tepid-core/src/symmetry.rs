//! Left/right mirror symmetry helpers.
//!
//! The plate is symmetric about its vertical centreline, so only the left
//! half is stored and relaxed. Every place that crosses the centreline
//! (the sweep's neighbour lookup and the full-domain reconstruction) goes
//! through [`mirror_col`] so both agree on where the axis sits.

use crate::field::Field;

/// Reflect a full-domain column index across the vertical centreline.
///
/// Column `c` and column `width - 1 - c` hold the same temperature.
///
/// # Examples
///
/// ```
/// use tepid_core::mirror_col;
///
/// assert_eq!(mirror_col(0, 5), 4);
/// assert_eq!(mirror_col(2, 5), 2); // centre column maps to itself
/// assert_eq!(mirror_col(3, 6), 2);
/// ```
#[inline]
pub fn mirror_col(col: usize, width: usize) -> usize {
    debug_assert!(col < width);
    width - 1 - col
}

/// Number of stored columns for a full domain of `width` columns.
///
/// For odd widths this includes the centre (axis) column; for even widths
/// the axis lies between columns `width / 2 - 1` and `width / 2`.
#[inline]
pub fn half_cols(width: usize) -> usize {
    width.div_ceil(2)
}

/// Reflect an out-of-range index back into `0..len` across the nearest edge.
///
/// `-1` maps to `1` and `len` maps to `len - 2`. In-range indices are
/// returned unchanged. Never wraps.
#[inline]
pub fn reflect(index: isize, len: usize) -> usize {
    let n = len as isize;
    let r = if index < 0 {
        -index
    } else if index >= n {
        2 * (n - 1) - index
    } else {
        index
    };
    r.clamp(0, n - 1) as usize
}

/// Rebuild the full-domain field from its stored left half.
///
/// Column `c < half.cols()` is copied directly; every other column is read
/// from `half[mirror_col(c, width)]`.
///
/// # Panics
///
/// Panics if `half.cols() != half_cols(width)`.
pub fn mirror_full(half: &Field, width: usize) -> Field {
    assert_eq!(
        half.cols(),
        half_cols(width),
        "half field has {} columns, expected {} for width {width}",
        half.cols(),
        half_cols(width),
    );
    let stored = half.cols();
    let mut data = Vec::with_capacity(half.rows() * width);
    for r in 0..half.rows() {
        let row = half.row(r);
        for c in 0..width {
            let src = if c < stored { c } else { mirror_col(c, width) };
            data.push(row[src]);
        }
    }
    Field::from_vec(half.rows(), width, data).expect("mirrored buffer sized rows * width")
}
