//! Discretized plate geometry.

use crate::error::ConfigError;
use crate::symmetry::half_cols;

/// Geometry of the discretized square plate.
///
/// The full domain is `resolution x resolution` points spaced `step`
/// apart; only `half_cols` columns are stored, the last of which is the
/// symmetry axis column when the resolution is odd.
///
/// # Examples
///
/// ```
/// use tepid_core::Plate;
///
/// let plate = Plate::new(9.0, 241).unwrap();
/// assert_eq!(plate.rows(), 241);
/// assert_eq!(plate.half_cols(), 121);
/// assert!((plate.step() - 0.0375).abs() < 1e-12);
/// assert_eq!(plate.axis_col(), 120);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plate {
    domain_size: f64,
    rows: usize,
    full_cols: usize,
    half_cols: usize,
    step: f64,
}

impl Plate {
    /// Minimum number of grid points per side.
    pub const MIN_RESOLUTION: usize = 3;

    /// Build the geometry for a `domain_size` square sampled at
    /// `resolution` points per side.
    pub fn new(domain_size: f64, resolution: usize) -> Result<Self, ConfigError> {
        if !domain_size.is_finite() || domain_size <= 0.0 {
            return Err(ConfigError::InvalidDomainSize { value: domain_size });
        }
        if resolution < Self::MIN_RESOLUTION {
            return Err(ConfigError::ResolutionTooSmall { resolution });
        }
        Ok(Self {
            domain_size,
            rows: resolution,
            full_cols: resolution,
            half_cols: half_cols(resolution),
            step: domain_size / (resolution - 1) as f64,
        })
    }

    /// Physical side length of the plate.
    pub fn domain_size(&self) -> f64 {
        self.domain_size
    }

    /// Grid rows (bottom to top).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns in the full, mirrored domain.
    pub fn full_cols(&self) -> usize {
        self.full_cols
    }

    /// Columns actually stored and relaxed.
    pub fn half_cols(&self) -> usize {
        self.half_cols
    }

    /// Index of the last stored column, adjacent to the symmetry axis.
    pub fn axis_col(&self) -> usize {
        self.half_cols - 1
    }

    /// Uniform grid spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Physical x coordinate of a full-domain column.
    pub fn x(&self, col: usize) -> f64 {
        col as f64 * self.step
    }

    /// Physical y coordinate of a row.
    pub fn y(&self, row: usize) -> f64 {
        row as f64 * self.step
    }

    /// Nearest grid index to a physical coordinate, clamped to the grid.
    pub fn nearest_index(&self, coord: f64) -> usize {
        let i = (coord / self.step).round();
        i.clamp(0.0, (self.rows - 1) as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_domain() {
        assert!(matches!(
            Plate::new(0.0, 5),
            Err(ConfigError::InvalidDomainSize { .. })
        ));
        assert!(matches!(
            Plate::new(f64::NAN, 5),
            Err(ConfigError::InvalidDomainSize { .. })
        ));
    }

    #[test]
    fn rejects_small_resolution() {
        assert_eq!(
            Plate::new(1.0, 2),
            Err(ConfigError::ResolutionTooSmall { resolution: 2 })
        );
    }

    #[test]
    fn coordinates_span_domain() {
        let p = Plate::new(4.0, 5).unwrap();
        assert_eq!(p.step(), 1.0);
        assert_eq!(p.x(0), 0.0);
        assert_eq!(p.x(4), 4.0);
        assert_eq!(p.y(2), 2.0);
        assert_eq!(p.half_cols(), 3);
    }

    #[test]
    fn nearest_index_rounds_and_clamps() {
        let p = Plate::new(4.0, 5).unwrap();
        assert_eq!(p.nearest_index(1.4), 1);
        assert_eq!(p.nearest_index(1.6), 2);
        assert_eq!(p.nearest_index(-3.0), 0);
        assert_eq!(p.nearest_index(99.0), 4);
    }
}
