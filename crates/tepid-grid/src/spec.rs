//! Plate specification: everything the grid builder needs.

use tepid_core::{ConfigError, Plate};

use crate::block::{BlockFootprint, HotBlock};
use crate::edge::{BoundarySpec, EdgeProfile};

/// Physical description of the plate problem.
///
/// [`Default`] is the reference configuration (see [`PlateSpec::reference`]).
#[derive(Clone, Debug, PartialEq)]
pub struct PlateSpec {
    /// Side length of the square plate.
    pub domain_size: f64,
    /// Grid points per side of the full domain.
    pub resolution: usize,
    /// Starting temperature of every free cell.
    pub initial_guess: f64,
    /// Temperature profiles on the boundary edges.
    pub boundary: BoundarySpec,
    /// Optional fixed-temperature block on the symmetry axis.
    pub hot_block: Option<HotBlock>,
}

/// A validated [`PlateSpec`]: geometry plus the resolved block footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSpec {
    /// Discretized geometry.
    pub plate: Plate,
    /// Cells covered by the hot block, if any.
    pub block: Option<(BlockFootprint, f64)>,
}

impl PlateSpec {
    /// Fraction of the plate height submerged in the cold bath.
    pub const BATH_FRACTION: f64 = 4.0 / 9.0;

    /// The reference problem: a 9 m plate on a 241-point grid with a
    /// 3 m block at 212 °F in its centre, a 100 °F top, a 32 °F bottom,
    /// and outer walls held at 32 °F up to the bath line and ramping
    /// linearly to 100 °F at the top. Free cells start at 90 °F.
    pub fn reference() -> Self {
        let l = 9.0;
        let (t_top, t_bottom) = (100.0, 32.0);
        Self {
            domain_size: l,
            resolution: 241,
            initial_guess: 90.0,
            boundary: BoundarySpec {
                bottom: EdgeProfile::Constant(t_bottom),
                top: EdgeProfile::Constant(t_top),
                wall: EdgeProfile::bath(t_bottom, t_top, Self::BATH_FRACTION * l, l),
            },
            hot_block: Some(HotBlock::centered(3.0, 212.0, l)),
        }
    }

    /// Validate every setting and resolve the grid geometry.
    ///
    /// Checks, in order: domain size and resolution, initial guess,
    /// boundary profiles, then the hot block (which must stay clear of
    /// every boundary edge).
    pub fn resolve(&self) -> Result<ResolvedSpec, ConfigError> {
        let plate = Plate::new(self.domain_size, self.resolution)?;
        if !self.initial_guess.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                what: "initial_guess".to_string(),
                value: self.initial_guess,
            });
        }
        self.boundary.validate()?;
        let block = match &self.hot_block {
            Some(b) => Some((b.footprint(&plate)?, b.temperature)),
            None => None,
        };
        Ok(ResolvedSpec { plate, block })
    }
}

impl Default for PlateSpec {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_resolves() {
        let r = PlateSpec::reference().resolve().unwrap();
        assert_eq!(r.plate.rows(), 241);
        let (fp, t) = r.block.unwrap();
        assert_eq!(t, 212.0);
        assert_eq!(fp.rows, 80..=160);
    }

    #[test]
    fn non_finite_guess_rejected() {
        let spec = PlateSpec {
            initial_guess: f64::INFINITY,
            ..PlateSpec::reference()
        };
        assert!(matches!(
            spec.resolve(),
            Err(ConfigError::NonFiniteTemperature { .. })
        ));
    }

    #[test]
    fn geometry_checked_before_profiles() {
        let spec = PlateSpec {
            resolution: 1,
            boundary: BoundarySpec {
                bottom: EdgeProfile::Piecewise(vec![]),
                ..BoundarySpec::uniform(0.0)
            },
            ..PlateSpec::reference()
        };
        assert_eq!(
            spec.resolve().unwrap_err(),
            ConfigError::ResolutionTooSmall { resolution: 1 }
        );
    }

    #[test]
    fn no_block_is_allowed() {
        let spec = PlateSpec {
            hot_block: None,
            ..PlateSpec::reference()
        };
        assert!(spec.resolve().unwrap().block.is_none());
    }
}
