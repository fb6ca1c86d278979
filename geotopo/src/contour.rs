//! Coordinate sequences: open [`LineString`]s and closed [`LinearRing`]s.
//!
//! Unlike some geometry models, a [`LinearRing`] here repeats its first coordinate at the end: a ring of a triangle
//! has 4 coordinates. A ring is either empty or has at least 4 coordinates.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::cartesian::{Coord, Envelope};
use crate::error::TopologyError;
use crate::segment::LineSegment;

/// Minimum number of coordinates in a non-empty ring.
pub const MIN_RING_SIZE: usize = 4;

/// Open sequence of coordinates.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString {
    points: Vec<Coord>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    /// Coordinates of the line.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Consumes the line returning its coordinates.
    pub fn into_points(self) -> Vec<Coord> {
        self.points
    }

    /// Returns true if the line has at least 2 coordinates and the first one equals the last one.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates over the segments of the line.
    pub fn iter_segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        iter_segments(&self.points)
    }

    /// Bounding box of the line, `None` for an empty line.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.points.iter())
    }

    /// Converts the line into a ring.
    pub fn into_ring(self) -> Result<LinearRing, TopologyError> {
        LinearRing::new(self.points)
    }
}

impl Deref for LineString {
    type Target = [Coord];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self::new(value)
    }
}

/// Closed sequence of coordinates: the last coordinate equals the first one.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct LinearRing {
    points: Vec<Coord>,
}

impl LinearRing {
    /// Creates a new ring.
    ///
    /// Fails if the sequence is not closed or is not empty but has fewer than [`MIN_RING_SIZE`] coordinates.
    pub fn new(points: Vec<Coord>) -> Result<Self, TopologyError> {
        validate_ring(&points)?;
        Ok(Self { points })
    }

    /// Creates a ring from coordinates that are known to be closed and long enough.
    pub(crate) fn new_unchecked(points: Vec<Coord>) -> Self {
        debug_assert!(validate_ring(&points).is_ok());
        Self { points }
    }

    /// Creates a ring from an open sequence, repeating the first coordinate at the end if needed.
    pub fn close(mut points: Vec<Coord>) -> Result<Self, TopologyError> {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if first != last {
                let first = *first;
                points.push(first);
            }
        }

        Self::new(points)
    }

    /// Coordinates of the ring including the closing one.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Consumes the ring returning its coordinates.
    pub fn into_points(self) -> Vec<Coord> {
        self.points
    }

    /// Iterates over the segments of the ring.
    pub fn iter_segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        iter_segments(&self.points)
    }

    /// Bounding box of the ring, `None` for an empty ring.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.points.iter())
    }
}

impl Deref for LinearRing {
    type Target = [Coord];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl TryFrom<Vec<Coord>> for LinearRing {
    type Error = TopologyError;

    fn try_from(value: Vec<Coord>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinearRing> for Vec<Coord> {
    fn from(value: LinearRing) -> Self {
        value.points
    }
}

impl From<LinearRing> for LineString {
    fn from(value: LinearRing) -> Self {
        Self::new(value.points)
    }
}

/// Checks that the coordinates form a valid ring.
pub fn validate_ring(points: &[Coord]) -> Result<(), TopologyError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Ok(());
    };

    if points.len() < MIN_RING_SIZE {
        return Err(TopologyError::TooFewPoints {
            expected: MIN_RING_SIZE,
            actual: points.len(),
        });
    }

    if first != last {
        return Err(TopologyError::RingNotClosed);
    }

    Ok(())
}

fn iter_segments(points: &[Coord]) -> impl Iterator<Item = LineSegment> + '_ {
    points.windows(2).map(|w| LineSegment::new(w[0], w[1]))
}
