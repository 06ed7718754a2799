//! The embedded hot block.

use std::ops::RangeInclusive;

use tepid_core::{mirror_col, ConfigError, Plate};

use crate::edge::Edge;

/// A fixed-temperature square embedded in the plate.
///
/// The block is always centred horizontally on the symmetry axis; only
/// its side length and vertical centre are free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotBlock {
    /// Side length in physical units. A side of zero pins the single
    /// nearest grid cell.
    pub side: f64,
    /// Physical `y` of the block centre.
    pub center_y: f64,
    /// Temperature the block is held at.
    pub temperature: f64,
}

/// Grid cells covered by a [`HotBlock`], in full-domain indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockFootprint {
    /// Covered rows.
    pub rows: RangeInclusive<usize>,
    /// Covered full-domain columns.
    pub cols: RangeInclusive<usize>,
}

impl BlockFootprint {
    /// Whether the footprint covers `(row, col)` (full-domain column).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

impl HotBlock {
    /// A block centred on the middle of the plate.
    pub fn centered(side: f64, temperature: f64, domain_size: f64) -> Self {
        Self {
            side,
            center_y: domain_size / 2.0,
            temperature,
        }
    }

    /// Validate the block against `plate` and return the cells it covers.
    ///
    /// Edge indices are rounded to the nearest grid line. The block must
    /// stay strictly inside the boundary ring: touching the bottom, top or
    /// wall cells is rejected rather than resolved by precedence.
    pub fn footprint(&self, plate: &Plate) -> Result<BlockFootprint, ConfigError> {
        if !self.temperature.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                what: "hot block temperature".to_string(),
                value: self.temperature,
            });
        }
        if !self.side.is_finite() || self.side < 0.0 {
            return Err(ConfigError::InvalidBlock {
                reason: format!("side must be finite and >= 0, got {}", self.side),
            });
        }
        let l = plate.domain_size();
        if self.side > l {
            return Err(ConfigError::BlockExceedsDomain {
                side: self.side,
                domain_size: l,
            });
        }
        if !self.center_y.is_finite() || self.center_y < 0.0 || self.center_y > l {
            return Err(ConfigError::InvalidBlock {
                reason: format!("center_y {} lies outside [0, {l}]", self.center_y),
            });
        }

        let half_side = self.side / 2.0;
        let r_lo = plate.nearest_index(self.center_y - half_side);
        let r_hi = plate.nearest_index(self.center_y + half_side);
        // Columns are mirrored rather than rounded independently so the
        // footprint stays symmetric about the axis. On even widths this
        // widens a thin block to the two columns straddling the axis.
        let left = plate.nearest_index(l / 2.0 - half_side);
        let right = mirror_col(left, plate.full_cols());
        let (c_lo, c_hi) = (left.min(right), left.max(right));

        let last = plate.rows() - 1;
        let overlap = |edge: Edge| ConfigError::BlockOverlapsBoundary {
            edge: edge.to_string(),
        };
        if r_lo == 0 {
            return Err(overlap(Edge::Bottom));
        }
        if r_hi >= last {
            return Err(overlap(Edge::Top));
        }
        if c_lo == 0 || c_hi >= last {
            return Err(overlap(Edge::Wall));
        }

        Ok(BlockFootprint {
            rows: r_lo..=r_hi,
            cols: c_lo..=c_hi,
        })
    }
}
