//! Grid builder: initial half field and fixed mask.
//!
//! Each stored cell is assigned by a single precedence order:
//! hot block, then boundary edge (bottom, top, wall), then interior.

use tepid_core::{ConfigError, Field, FixedMask, Plate};

use crate::block::BlockFootprint;
use crate::edge::{BoundarySpec, Edge};
use crate::spec::PlateSpec;

/// Which rule assigns a cell's initial value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRule {
    /// Inside the hot block; fixed.
    Block,
    /// On a boundary edge; fixed.
    Edge(Edge),
    /// Free cell seeded with the initial guess.
    Interior,
}

impl CellRule {
    /// Whether cells under this rule are clamped.
    pub fn is_fixed(self) -> bool {
        !matches!(self, Self::Interior)
    }
}

/// The freshly built half-domain grid.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialGrid {
    /// Discretized geometry.
    pub plate: Plate,
    /// Initial temperatures of the stored half.
    pub field: Field,
    /// Cells excluded from relaxation.
    pub mask: FixedMask,
}

/// Decide which rule applies to stored cell `(row, col)`.
///
/// At the bottom-left and top-left corners the horizontal edges win over
/// the wall.
pub fn classify(plate: &Plate, block: Option<&BlockFootprint>, row: usize, col: usize) -> CellRule {
    if block.is_some_and(|b| b.contains(row, col)) {
        CellRule::Block
    } else if row == 0 {
        CellRule::Edge(Edge::Bottom)
    } else if row == plate.rows() - 1 {
        CellRule::Edge(Edge::Top)
    } else if col == 0 {
        CellRule::Edge(Edge::Wall)
    } else {
        CellRule::Interior
    }
}

/// Build the initial half field and fixed mask for `spec`.
///
/// Only columns `0..plate.half_cols()` are constructed; the right half is
/// reconstructed by mirroring whenever a full field is needed.
///
/// # Examples
///
/// ```
/// use tepid_grid::{build_grid, BoundarySpec, HotBlock, PlateSpec};
///
/// let spec = PlateSpec {
///     domain_size: 4.0,
///     resolution: 5,
///     initial_guess: 50.0,
///     boundary: BoundarySpec::uniform(0.0),
///     hot_block: Some(HotBlock::centered(0.0, 100.0, 4.0)),
/// };
/// let grid = build_grid(&spec).unwrap();
/// assert_eq!(grid.field.cols(), 3);
/// assert_eq!(grid.field.get(2, 2), 100.0);
/// assert_eq!(grid.field.get(1, 1), 50.0);
/// assert_eq!(grid.mask.free_count(), 5);
/// ```
pub fn build_grid(spec: &PlateSpec) -> Result<InitialGrid, ConfigError> {
    let resolved = spec.resolve()?;
    let plate = resolved.plate;
    let (rows, cols) = (plate.rows(), plate.half_cols());
    let footprint = resolved.block.as_ref().map(|(fp, _)| fp);
    let block_temp = resolved.block.as_ref().map_or(0.0, |(_, t)| *t);

    let mut field = Field::new(rows, cols, spec.initial_guess);
    let mut mask = FixedMask::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            let rule = classify(&plate, footprint, r, c);
            if let Some(value) = fixed_value(rule, &spec.boundary, &plate, block_temp, r, c) {
                field.set(r, c, value);
                mask.fix(r, c);
            }
        }
    }

    Ok(InitialGrid { plate, field, mask })
}

fn fixed_value(
    rule: CellRule,
    boundary: &BoundarySpec,
    plate: &Plate,
    block_temp: f64,
    row: usize,
    col: usize,
) -> Option<f64> {
    let l = plate.domain_size();
    match rule {
        CellRule::Block => Some(block_temp),
        CellRule::Edge(edge @ (Edge::Bottom | Edge::Top)) => {
            Some(boundary.profile(edge).value_at(plate.x(col), l))
        }
        CellRule::Edge(Edge::Wall) => Some(boundary.wall.value_at(plate.y(row), l)),
        CellRule::Interior => None,
    }
}

impl PlateSpec {
    /// Shorthand for [`build_grid`].
    pub fn build(&self) -> Result<InitialGrid, ConfigError> {
        build_grid(self)
    }
}
