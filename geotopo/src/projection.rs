//! Interface to an external coordinate transformation engine.
//!
//! All algorithms of the crate work in a single planar coordinate system. Geometries in other systems must be
//! transformed before being passed to them. This crate does not ship any projection, only the trait that a
//! transformation engine implements so that [`Geom::project`](crate::Geom::project) can use it.

use crate::cartesian::Coord;

/// Transformation of coordinates from one coordinate system into another.
pub trait Projection {
    /// Transforms a coordinate. Returns `None` if the coordinate cannot be transformed.
    fn project(&self, input: &Coord) -> Option<Coord>;
}

/// Projection that returns the input coordinates unchanged.
#[derive(Debug, Default, Copy, Clone)]
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    fn project(&self, input: &Coord) -> Option<Coord> {
        Some(*input)
    }
}
