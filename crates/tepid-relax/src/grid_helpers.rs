//! Neighbour lookup on the stored half plate.
//!
//! All out-of-range neighbours are reflected, never wrapped: a column
//! past the stored half goes through [`mirror_col`], and an index past an
//! outer edge reflects across that edge.

use smallvec::SmallVec;
use tepid_core::{mirror_col, reflect, Plate};

/// Resolve a neighbour column of the stored half.
pub(crate) fn resolve_col(col: isize, plate: &Plate) -> usize {
    if col > plate.axis_col() as isize {
        mirror_col(col as usize, plate.full_cols())
    } else {
        reflect(col, plate.half_cols())
    }
}

/// Resolve a neighbour row.
pub(crate) fn resolve_row(row: isize, plate: &Plate) -> usize {
    reflect(row, plate.rows())
}

/// Flat indices (into the half field) of the four neighbours of `(r, c)`:
/// up, down, left, right.
pub(crate) fn neighbours_flat(r: usize, c: usize, plate: &Plate) -> SmallVec<[usize; 4]> {
    let cols = plate.half_cols();
    let (r, c) = (r as isize, c as isize);
    let offsets: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
    offsets
        .iter()
        .map(|&(dr, dc)| resolve_row(r + dr, plate) * cols + resolve_col(c + dc, plate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_neighbours() {
        let plate = Plate::new(4.0, 5).unwrap();
        let nbs = neighbours_flat(2, 1, &plate);
        // up (3,1)=10, down (1,1)=4, left (2,0)=6, right (2,2)=8
        assert_eq!(nbs.as_slice(), &[10, 4, 6, 8]);
    }

    #[test]
    fn axis_column_reflects_odd_width() {
        let plate = Plate::new(4.0, 5).unwrap();
        // (2,2) is on the axis; its right neighbour is full col 3 -> col 1.
        let nbs = neighbours_flat(2, 2, &plate);
        assert_eq!(nbs.as_slice(), &[11, 5, 7, 7]);
    }

    #[test]
    fn axis_column_reflects_even_width() {
        let plate = Plate::new(5.0, 6).unwrap();
        assert_eq!(plate.half_cols(), 3);
        // right of col 2 is full col 3, whose mirror is col 2 itself.
        assert_eq!(resolve_col(3, &plate), 2);
    }

    #[test]
    fn outer_edges_reflect() {
        let plate = Plate::new(4.0, 5).unwrap();
        assert_eq!(resolve_col(-1, &plate), 1);
        assert_eq!(resolve_row(-1, &plate), 1);
        assert_eq!(resolve_row(5, &plate), 3);
    }
}
