//! Boundary edges and their temperature profiles.

use std::fmt;

use tepid_core::ConfigError;

/// One of the three boundary edges of the stored half domain.
///
/// The right-hand wall of the full plate is the mirror image of
/// [`Edge::Wall`] and is never stamped directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Row 0, `y = 0`. Profile is evaluated along `x`.
    Bottom,
    /// Last row, `y = L`. Profile is evaluated along `x`.
    Top,
    /// Column 0, `x = 0`. Profile is evaluated along `y`.
    Wall,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => write!(f, "bottom"),
            Self::Top => write!(f, "top"),
            Self::Wall => write!(f, "wall"),
        }
    }
}

/// Temperature along a boundary edge as a function of position.
///
/// Positions run from `0` at the start of the edge (left end for
/// horizontal edges, bottom end for the wall) to the domain length.
///
/// # Examples
///
/// ```
/// use tepid_grid::EdgeProfile;
///
/// let ramp = EdgeProfile::Ramp { start: 32.0, end: 100.0 };
/// assert_eq!(ramp.value_at(4.5, 9.0), 66.0);
///
/// // 32 up to 4 m, then linear to 100 at 9 m.
/// let bath = EdgeProfile::bath(32.0, 100.0, 4.0, 9.0);
/// assert_eq!(bath.value_at(2.0, 9.0), 32.0);
/// assert_eq!(bath.value_at(9.0, 9.0), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeProfile {
    /// The same temperature everywhere on the edge.
    Constant(f64),
    /// Linear from `start` at position 0 to `end` at the far end.
    Ramp {
        /// Temperature at position 0.
        start: f64,
        /// Temperature at the far end of the edge.
        end: f64,
    },
    /// Piecewise-linear through `(position, temperature)` knots.
    ///
    /// Knot positions must be non-decreasing. Outside the knot range the
    /// nearest end value is held.
    Piecewise(Vec<(f64, f64)>),
}

impl EdgeProfile {
    /// Constant `bottom` up to `bath_height`, then linear to `top` at
    /// `length`. `bath_height` is clamped to `[0, length]`.
    pub fn bath(bottom: f64, top: f64, bath_height: f64, length: f64) -> Self {
        let y0 = bath_height.clamp(0.0, length);
        Self::Piecewise(vec![(0.0, bottom), (y0, bottom), (length, top)])
    }

    /// Temperature at `pos` along an edge of the given `length`.
    pub fn value_at(&self, pos: f64, length: f64) -> f64 {
        match self {
            Self::Constant(t) => *t,
            Self::Ramp { start, end } => start + (end - start) * (pos / length),
            Self::Piecewise(knots) => interpolate(knots, pos),
        }
    }

    /// Check that the profile is defined and every value is finite.
    pub fn validate(&self, edge: Edge) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidProfile {
            edge: edge.to_string(),
            reason,
        };
        match self {
            Self::Constant(t) => check_finite(edge, "temperature", *t),
            Self::Ramp { start, end } => {
                check_finite(edge, "ramp start", *start)?;
                check_finite(edge, "ramp end", *end)
            }
            Self::Piecewise(knots) => {
                if knots.is_empty() {
                    return Err(invalid("no knots".to_string()));
                }
                for &(pos, t) in knots {
                    if !pos.is_finite() {
                        return Err(invalid(format!("knot position {pos} is not finite")));
                    }
                    check_finite(edge, "knot temperature", t)?;
                }
                if let Some(w) = knots.windows(2).find(|w| w[1].0 < w[0].0) {
                    return Err(invalid(format!(
                        "knot positions must be non-decreasing ({} after {})",
                        w[1].0, w[0].0
                    )));
                }
                Ok(())
            }
        }
    }
}

fn check_finite(edge: Edge, what: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteTemperature {
            what: format!("{edge} {what}"),
            value,
        })
    }
}

/// Linear interpolation through sorted knots; holds end values outside.
/// NaN for an empty knot list, which `validate` rejects.
fn interpolate(knots: &[(f64, f64)], pos: f64) -> f64 {
    let Some(&(first_pos, first_val)) = knots.first() else {
        return f64::NAN;
    };
    if pos <= first_pos {
        return first_val;
    }
    for w in knots.windows(2) {
        let (x0, v0) = w[0];
        let (x1, v1) = w[1];
        if pos <= x1 {
            if x1 == x0 {
                return v1;
            }
            return v0 + (v1 - v0) * ((pos - x0) / (x1 - x0));
        }
    }
    knots[knots.len() - 1].1
}

/// Temperature profiles for the three stored boundary edges.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundarySpec {
    /// Profile of the bottom edge.
    pub bottom: EdgeProfile,
    /// Profile of the top edge.
    pub top: EdgeProfile,
    /// Profile of the outer wall (mirrored onto the right-hand wall).
    pub wall: EdgeProfile,
}

impl BoundarySpec {
    /// Every boundary cell held at `temperature`.
    pub fn uniform(temperature: f64) -> Self {
        Self {
            bottom: EdgeProfile::Constant(temperature),
            top: EdgeProfile::Constant(temperature),
            wall: EdgeProfile::Constant(temperature),
        }
    }

    /// Profile attached to `edge`.
    pub fn profile(&self, edge: Edge) -> &EdgeProfile {
        match edge {
            Edge::Bottom => &self.bottom,
            Edge::Top => &self.top,
            Edge::Wall => &self.wall,
        }
    }

    /// Validate all three profiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for edge in [Edge::Bottom, Edge::Top, Edge::Wall] {
            self.profile(edge).validate(edge)?;
        }
        Ok(())
    }
}
