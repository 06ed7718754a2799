//! The Jacobi sweep.
//!
//! Every free cell of the next field is the mean of its four neighbours
//! in the previous field. Reads come only from the previous field, so the
//! result does not depend on cell visiting order. Fixed cells are copied
//! through unchanged.

use smallvec::SmallVec;
use tepid_core::{Field, FixedMask, Plate};

use crate::grid_helpers::neighbours_flat;

/// Precomputed neighbour table for the free cells of a half plate.
///
/// Building the table once per solve keeps the per-iteration sweep to a
/// straight pass over the free cells.
///
/// # Examples
///
/// ```
/// use tepid_core::{Field, FixedMask, Plate};
/// use tepid_relax::Stencil;
///
/// let plate = Plate::new(2.0, 3).unwrap();
/// let mut mask = FixedMask::new(3, 2);
/// for (r, c) in [(0, 0), (0, 1), (2, 0), (2, 1), (1, 0)] {
///     mask.fix(r, c);
/// }
/// let prev = Field::from_vec(3, 2, vec![0.0, 0.0, 8.0, 1.0, 4.0, 4.0]).unwrap();
/// let mut next = prev.clone();
///
/// let stencil = Stencil::new(&plate, &mask);
/// let delta = stencil.sweep_into(&prev, &mut next);
/// // (1,1): up 4, down 0, left 8, right mirrors back onto (1,0) = 8
/// assert_eq!(next.get(1, 1), 5.0);
/// assert_eq!(delta, 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct Stencil {
    rows: usize,
    cols: usize,
    free: Vec<(usize, SmallVec<[usize; 4]>)>,
}

impl Stencil {
    /// Build the neighbour table for every free cell of `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not have `plate.rows() x plate.half_cols()`
    /// cells.
    pub fn new(plate: &Plate, mask: &FixedMask) -> Self {
        assert!(
            mask.rows() == plate.rows() && mask.cols() == plate.half_cols(),
            "mask is {}x{}, plate half is {}x{}",
            mask.rows(),
            mask.cols(),
            plate.rows(),
            plate.half_cols(),
        );
        let cols = plate.half_cols();
        let mut free = Vec::with_capacity(mask.free_count());
        for r in 0..plate.rows() {
            for c in 0..cols {
                if !mask.is_fixed(r, c) {
                    free.push((r * cols + c, neighbours_flat(r, c, plate)));
                }
            }
        }
        Self {
            rows: plate.rows(),
            cols,
            free,
        }
    }

    /// Number of cells updated by each sweep.
    pub fn free_cells(&self) -> usize {
        self.free.len()
    }

    /// Sweep `prev` into `out` and return the largest absolute change over
    /// the free cells (`0.0` when there are none).
    ///
    /// `out` is fully overwritten: fixed cells receive their `prev` value.
    ///
    /// # Panics
    ///
    /// Panics if either field does not match the stencil's dimensions.
    pub fn sweep_into(&self, prev: &Field, out: &mut Field) -> f64 {
        self.check_shape(prev);
        self.check_shape(out);
        let src = prev.as_slice();
        let dst = out.as_mut_slice();
        dst.copy_from_slice(src);

        let mut max_delta = 0.0f64;
        for (i, nbs) in &self.free {
            let sum: f64 = nbs.iter().map(|&n| src[n]).sum();
            let value = sum / nbs.len() as f64;
            max_delta = max_delta.max((value - src[*i]).abs());
            dst[*i] = value;
        }
        max_delta
    }

    fn check_shape(&self, field: &Field) {
        assert!(
            field.rows() == self.rows && field.cols() == self.cols,
            "field is {}x{}, stencil expects {}x{}",
            field.rows(),
            field.cols(),
            self.rows,
            self.cols,
        );
    }
}

/// One Jacobi sweep as a pure function of the previous half field.
///
/// Builds a throwaway [`Stencil`]; loops should keep one and call
/// [`Stencil::sweep_into`] instead.
pub fn jacobi_sweep(prev: &Field, mask: &FixedMask, plate: &Plate) -> Field {
    let mut next = prev.clone();
    jacobi_sweep_into(prev, mask, plate, &mut next);
    next
}

/// Sweep `prev` into `out` and return the largest change over free cells.
///
/// Same as [`Stencil::sweep_into`] with a throwaway stencil.
pub fn jacobi_sweep_into(prev: &Field, mask: &FixedMask, plate: &Plate, out: &mut Field) -> f64 {
    Stencil::new(plate, mask).sweep_into(prev, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tepid_core::mirror_full;
    use tepid_test_utils::fixtures::five_by_five;

    #[test]
    fn fixed_cells_copied() {
        let g = five_by_five().build().unwrap();
        let next = jacobi_sweep(&g.field, &g.mask, &g.plate);
        for r in 0..5 {
            for c in 0..3 {
                if g.mask.is_fixed(r, c) {
                    assert_eq!(next.get(r, c), g.field.get(r, c));
                }
            }
        }
    }

    #[test]
    fn first_sweep_of_small_plate() {
        let g = five_by_five().build().unwrap();
        let next = jacobi_sweep(&g.field, &g.mask, &g.plate);
        // (1,1): up 50, down 0, left 0, right 50
        assert_eq!(next.get(1, 1), 25.0);
        // (1,2) on the axis: up 100, down 0, left 50, right mirrors to 50
        assert_eq!(next.get(1, 2), 50.0);
        // (2,1): up 50, down 50, left 0, right 100
        assert_eq!(next.get(2, 1), 50.0);
    }

    #[test]
    fn sweep_reports_max_delta() {
        let g = five_by_five().build().unwrap();
        let stencil = Stencil::new(&g.plate, &g.mask);
        let mut next = g.field.clone();
        let delta = stencil.sweep_into(&g.field, &mut next);
        assert_eq!(delta, 25.0);
        assert_eq!(stencil.free_cells(), 5);
    }

    #[test]
    fn free_function_matches_stencil() {
        let g = five_by_five().build().unwrap();
        let mut out = Field::new(5, 3, f64::NAN);
        let delta = jacobi_sweep_into(&g.field, &g.mask, &g.plate, &mut out);
        assert_eq!(delta, 25.0);
        assert_eq!(out, jacobi_sweep(&g.field, &g.mask, &g.plate));
    }

    #[test]
    fn all_fixed_has_zero_delta() {
        let plate = Plate::new(2.0, 3).unwrap();
        let mut mask = FixedMask::new(3, 2);
        for r in 0..3 {
            for c in 0..2 {
                mask.fix(r, c);
            }
        }
        let prev = Field::new(3, 2, 7.0);
        let mut next = Field::new(3, 2, 0.0);
        let stencil = Stencil::new(&plate, &mask);
        assert_eq!(stencil.sweep_into(&prev, &mut next), 0.0);
        assert_eq!(next, prev);
    }

    #[test]
    #[should_panic(expected = "stencil expects")]
    fn mismatched_field_panics() {
        let g = five_by_five().build().unwrap();
        let stencil = Stencil::new(&g.plate, &g.mask);
        let wrong = Field::new(5, 5, 0.0);
        let mut out = g.field.clone();
        stencil.sweep_into(&wrong, &mut out);
    }

    proptest! {
        #[test]
        fn free_cells_are_neighbour_means(
            values in proptest::collection::vec(0.0f64..200.0, 7 * 4),
        ) {
            let plate = Plate::new(6.0, 7).unwrap();
            let mut mask = FixedMask::new(7, 4);
            for c in 0..4 {
                mask.fix(0, c);
                mask.fix(6, c);
            }
            for r in 0..7 {
                mask.fix(r, 0);
            }
            let prev = Field::from_vec(7, 4, values).unwrap();
            let next = jacobi_sweep(&prev, &mask, &plate);
            let full = mirror_full(&prev, 7);
            for r in 1..6 {
                for c in 1..4 {
                    let expected = (full.get(r + 1, c)
                        + full.get(r - 1, c)
                        + full.get(r, c - 1)
                        + full.get(r, c + 1))
                        / 4.0;
                    prop_assert!((next.get(r, c) - expected).abs() < 1e-9);
                }
            }
            for r in 0..7 {
                prop_assert_eq!(next.get(r, 0), prev.get(r, 0));
            }
        }

        #[test]
        fn sweep_stays_within_bounds(
            values in proptest::collection::vec(-50.0f64..50.0, 7 * 4),
        ) {
            let plate = Plate::new(6.0, 7).unwrap();
            let mut mask = FixedMask::new(7, 4);
            for c in 0..4 {
                mask.fix(0, c);
                mask.fix(6, c);
            }
            let prev = Field::from_vec(7, 4, values).unwrap();
            let (lo, hi) = prev.min_max().unwrap();
            let next = jacobi_sweep(&prev, &mask, &plate);
            let (nlo, nhi) = next.min_max().unwrap();
            prop_assert!(nlo >= lo - 1e-12 && nhi <= hi + 1e-12);
        }
    }
}
