//! Precision models for computed coordinates.

use serde::{Deserialize, Serialize};

use crate::cartesian::Coord;

/// Defines the grid computed coordinates are snapped to.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrecisionModel {
    /// Full double precision, values are not changed.
    #[default]
    Floating,
    /// Values are rounded to a grid with `1 / scale` cell size. For example, scale `1000.0` keeps three decimal
    /// digits.
    Fixed {
        /// Number of grid cells per unit.
        scale: f64,
    },
}

impl PrecisionModel {
    /// Rounds the value to the model grid.
    pub fn make_precise_value(&self, value: f64) -> f64 {
        match self {
            Self::Floating => value,
            Self::Fixed { scale } => (value * scale).round() / scale,
        }
    }

    /// Rounds `x` and `y` of the coordinate to the model grid.
    pub fn make_precise(&self, coord: &Coord) -> Coord {
        match self {
            Self::Floating => *coord,
            Self::Fixed { .. } => Coord {
                x: self.make_precise_value(coord.x),
                y: self.make_precise_value(coord.y),
                ..*coord
            },
        }
    }

    /// Returns true if the model does not change values.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating)
    }
}
