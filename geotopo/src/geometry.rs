//! The [`Geom`] sum type over all supported geometries.

use serde::{Deserialize, Serialize};

use crate::cartesian::{Coord, Envelope};
use crate::contour::{LineString, LinearRing};
use crate::polygon::Polygon;
use crate::projection::Projection;

/// Topological dimension of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Empty geometry.
    Empty,
    /// Points.
    Point,
    /// Lines.
    Line,
    /// Areas.
    Area,
}

/// Any geometry supported by the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom {
    /// Single point.
    Point(Coord),
    /// Line.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Ordered list of other geometries.
    Collection(GeometryCollection),
}

/// Ordered list of geometries. Collections can be nested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    geometries: Vec<Geom>,
}

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geom>) -> Self {
        Self { geometries }
    }

    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Iterates over direct members of the collection.
    pub fn iter(&self) -> impl Iterator<Item = &Geom> {
        self.geometries.iter()
    }

    /// Number of direct members.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl FromIterator<Geom> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geom>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Geom {
    /// Iterates over all non-collection geometries, descending into nested collections depth first.
    pub fn iter_primitives(&self) -> Box<dyn Iterator<Item = &Geom> + '_> {
        match self {
            Geom::Collection(collection) => {
                Box::new(collection.iter().flat_map(|g| g.iter_primitives()))
            }
            other => Box::new(std::iter::once(other)),
        }
    }

    /// All coordinates of the geometry in depth-first order. Ring coordinates include the closing one.
    pub fn coordinates(&self) -> Vec<Coord> {
        let mut coords = vec![];
        for primitive in self.iter_primitives() {
            match primitive {
                Geom::Point(p) => coords.push(*p),
                Geom::LineString(line) => coords.extend_from_slice(line.points()),
                Geom::Polygon(polygon) => {
                    for ring in polygon.iter_rings() {
                        coords.extend_from_slice(ring.points());
                    }
                }
                Geom::Collection(_) => {}
            }
        }

        coords
    }

    /// Returns true if the geometry has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.iter_primitives().all(|g| match g {
            Geom::Point(_) => false,
            Geom::LineString(line) => line.is_empty(),
            Geom::Polygon(polygon) => polygon.is_empty(),
            Geom::Collection(_) => true,
        })
    }

    /// Highest dimension among the non-empty members of the geometry.
    pub fn dimension(&self) -> Dimension {
        self.iter_primitives()
            .map(|g| match g {
                Geom::Point(_) => Dimension::Point,
                Geom::LineString(line) if !line.is_empty() => Dimension::Line,
                Geom::Polygon(polygon) if !polygon.is_empty() => Dimension::Area,
                _ => Dimension::Empty,
            })
            .max()
            .unwrap_or(Dimension::Empty)
    }

    /// Bounding box of the geometry, `None` if the geometry is empty.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.coordinates().iter())
    }

    /// Projects all the coordinates of the geometry with the given projection.
    ///
    /// Returns `None` if any of the coordinates cannot be projected.
    pub fn project<Proj: Projection + ?Sized>(&self, projection: &Proj) -> Option<Geom> {
        let project_all = |points: &[Coord]| -> Option<Vec<Coord>> {
            points.iter().map(|p| projection.project(p)).collect()
        };
        let project_ring =
            |ring: &LinearRing| -> Option<LinearRing> { LinearRing::new(project_all(ring.points())?).ok() };

        Some(match self {
            Geom::Point(p) => Geom::Point(projection.project(p)?),
            Geom::LineString(line) => Geom::LineString(LineString::new(project_all(line.points())?)),
            Geom::Polygon(polygon) => Geom::Polygon(Polygon::new(
                project_ring(polygon.shell())?,
                polygon
                    .holes()
                    .iter()
                    .map(project_ring)
                    .collect::<Option<Vec<_>>>()?,
            )),
            Geom::Collection(collection) => Geom::Collection(
                collection
                    .iter()
                    .map(|g| g.project(projection))
                    .collect::<Option<GeometryCollection>>()?,
            ),
        })
    }
}

impl From<Coord> for Geom {
    fn from(value: Coord) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<GeometryCollection> for Geom {
    fn from(value: GeometryCollection) -> Self {
        Self::Collection(value)
    }
}
