//! Temperature fields and fixed-cell masks.
//!
//! Both types are dense row-major grids. Row 0 is the bottom edge of the
//! plate and column 0 is the outer (left) wall, so a cell `(row, col)`
//! sits at physical position `(col * step, row * step)`.

use std::ops::{Index, IndexMut};

/// A dense 2D grid of `f64` temperatures.
///
/// # Examples
///
/// ```
/// use tepid_core::Field;
///
/// let mut field = Field::new(3, 4, 20.0);
/// field[(1, 2)] = 100.0;
/// assert_eq!(field.rows(), 3);
/// assert_eq!(field.cols(), 4);
/// assert_eq!(field.get(1, 2), 100.0);
/// assert_eq!(field.row(1), &[20.0, 20.0, 100.0, 20.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Field {
    /// Create a `rows x cols` field with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape(&self, other: &Field) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub fn flat(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Temperature at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.flat(row, col)]
    }

    /// Overwrite the temperature at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let i = self.flat(row, col);
        self.data[i] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The underlying row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the field and return its buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Smallest and largest temperature, or `None` for an empty field.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut it = self.data.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl Index<(usize, usize)> for Field {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[self.flat(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Field {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let i = self.flat(row, col);
        &mut self.data[i]
    }
}

/// Marks cells whose temperature is clamped by a boundary or hot block.
///
/// Same dimensions as the [`Field`] it describes. Fixed cells are never
/// written by the relaxation sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMask {
    rows: usize,
    cols: usize,
    data: Vec<bool>,
}

impl FixedMask {
    /// Create a mask with every cell free.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![false; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the mask matches `field`'s dimensions.
    pub fn fits(&self, field: &Field) -> bool {
        self.rows == field.rows() && self.cols == field.cols()
    }

    /// Whether `(row, col)` is fixed.
    #[inline]
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.data[row * self.cols + col]
    }

    /// Mark `(row, col)` as fixed.
    pub fn fix(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] = true;
    }

    /// The underlying row-major flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of fixed cells.
    pub fn fixed_count(&self) -> usize {
        self.data.iter().filter(|&&f| f).count()
    }

    /// Number of cells the sweep updates.
    pub fn free_count(&self) -> usize {
        self.data.len() - self.fixed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_length() {
        assert!(Field::from_vec(2, 3, vec![0.0; 6]).is_some());
        assert!(Field::from_vec(2, 3, vec![0.0; 5]).is_none());
    }

    #[test]
    fn row_major_layout() {
        let f = Field::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(f.get(0, 2), 3.0);
        assert_eq!(f.get(1, 0), 4.0);
        assert_eq!(f[(1, 1)], 5.0);
        assert_eq!(f.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn min_max_spans_values() {
        let f = Field::from_vec(1, 4, vec![3.0, -1.0, 7.5, 2.0]).unwrap();
        assert_eq!(f.min_max(), Some((-1.0, 7.5)));
        assert_eq!(Field::new(0, 0, 0.0).min_max(), None);
    }

    #[test]
    fn mask_counts() {
        let mut m = FixedMask::new(3, 3);
        assert_eq!(m.free_count(), 9);
        m.fix(0, 0);
        m.fix(2, 1);
        m.fix(2, 1);
        assert!(m.is_fixed(2, 1));
        assert!(!m.is_fixed(1, 1));
        assert_eq!(m.fixed_count(), 2);
        assert_eq!(m.free_count(), 7);
    }

    #[test]
    fn mask_fits_field() {
        let m = FixedMask::new(4, 2);
        assert!(m.fits(&Field::new(4, 2, 0.0)));
        assert!(!m.fits(&Field::new(2, 4, 0.0)));
    }
}
