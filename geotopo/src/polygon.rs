//! Polygons with a shell and holes.

use serde::{Deserialize, Serialize};

use crate::cartesian::{Coord, Envelope};
use crate::contour::LinearRing;
use crate::error::TopologyError;
use crate::segment::LineSegment;

/// Polygon consists of one outer ring (shell), and zero or more inner rings (holes).
///
/// Rings of a polygon can be wound in any direction: algorithms test the orientation of each ring instead of assuming
/// it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    shell: LinearRing,
    holes: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Self {
        Self { shell, holes }
    }

    /// Creates a polygon without holes from a closed sequence of coordinates.
    pub fn from_coords(shell: Vec<Coord>) -> Result<Self, TopologyError> {
        Ok(Self::new(LinearRing::new(shell)?, vec![]))
    }

    /// Outer ring.
    pub fn shell(&self) -> &LinearRing {
        &self.shell
    }

    /// Inner rings.
    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    /// Iterates over all rings of the polygon starting with the shell.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ LinearRing> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }

    /// Iterates over all segments of the polygon rings.
    pub fn iter_segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.iter_rings().flat_map(LinearRing::iter_segments)
    }

    /// Returns true if the shell has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    /// Bounding box of the polygon.
    pub fn envelope(&self) -> Option<Envelope> {
        self.shell.envelope()
    }
}

impl From<LinearRing> for Polygon {
    fn from(value: LinearRing) -> Self {
        Self::new(value, vec![])
    }
}
