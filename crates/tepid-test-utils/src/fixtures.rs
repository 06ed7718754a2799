//! Small plate configurations for fast tests.
//!
//! - [`five_by_five`]: 5x5 plate, cold ring, single hot centre cell
//! - [`reference_coarse`]: the reference problem at 25 points per side
//! - [`bare_plate`]: uniform boundary, no block
//! - [`ramped_walls`]: linear wall profile, no block
//! - [`touching_block`]: a block that reaches the bottom edge (invalid)

use tepid_grid::{BoundarySpec, EdgeProfile, HotBlock, PlateSpec};

/// 5x5 plate of side 4 with all edges at 0, the centre cell held at 100
/// and every other cell starting at 50.
pub fn five_by_five() -> PlateSpec {
    PlateSpec {
        domain_size: 4.0,
        resolution: 5,
        initial_guess: 50.0,
        boundary: BoundarySpec::uniform(0.0),
        hot_block: Some(HotBlock::centered(0.0, 100.0, 4.0)),
    }
}

/// The reference problem on a coarse 25-point grid.
pub fn reference_coarse() -> PlateSpec {
    PlateSpec {
        resolution: 25,
        ..PlateSpec::reference()
    }
}

/// `n x n` plate with every edge at `temperature` and no block.
pub fn bare_plate(n: usize, temperature: f64) -> PlateSpec {
    PlateSpec {
        domain_size: 1.0,
        resolution: n,
        initial_guess: 0.0,
        boundary: BoundarySpec::uniform(temperature),
        hot_block: None,
    }
}

/// Plate with a linear ramp on the walls and different top/bottom values.
pub fn ramped_walls(n: usize) -> PlateSpec {
    PlateSpec {
        domain_size: 2.0,
        resolution: n,
        initial_guess: 10.0,
        boundary: BoundarySpec {
            bottom: EdgeProfile::Constant(0.0),
            top: EdgeProfile::Constant(40.0),
            wall: EdgeProfile::Ramp {
                start: 0.0,
                end: 40.0,
            },
        },
        hot_block: None,
    }
}

/// A block whose lower edge lands on the bottom boundary row.
pub fn touching_block() -> PlateSpec {
    PlateSpec {
        hot_block: Some(HotBlock {
            side: 2.0,
            center_y: 1.0,
            temperature: 150.0,
        }),
        ..five_by_five()
    }
}

