//! Conversions from the `geo-types` geometry model.
//!
//! Multi-geometries become [`GeometryCollection`]s of their parts. Polygons are validated, so the conversions of
//! polygons and of geometries that can contain them are fallible.

use geo_types::{coord, CoordNum};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

use crate::cartesian::{CartesianPoint2d, Coord, NewCartesianPoint2d};
use crate::contour::{LineString, LinearRing};
use crate::error::TopologyError;
use crate::geometry::{Geom, GeometryCollection};
use crate::polygon::Polygon;

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for geo_types::Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<T> for geo_types::Coord<T> {
    fn new(x: T, y: T) -> Self {
        coord!(x: x, y: y)
    }
}

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        coord!(x: value.x, y: value.y)
    }
}

impl From<geo_types::Point<f64>> for Coord {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        LineString::new(value.0.into_iter().map(Coord::from).collect())
    }
}

impl TryFrom<geo_types::LineString<f64>> for LinearRing {
    type Error = TopologyError;

    fn try_from(value: geo_types::LineString<f64>) -> Result<Self, Self::Error> {
        LinearRing::new(value.0.into_iter().map(Coord::from).collect())
    }
}

impl TryFrom<geo_types::Polygon<f64>> for Polygon {
    type Error = TopologyError;

    fn try_from(value: geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        let (exterior, interiors) = value.into_inner();
        let holes = interiors
            .into_iter()
            .map(LinearRing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polygon::new(exterior.try_into()?, holes))
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geom {
    type Error = TopologyError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo_types::Geometry;

        Ok(match value {
            Geometry::Point(point) => Geom::Point(point.into()),
            Geometry::Line(line) => Geom::LineString(LineString::new(vec![
                line.start.into(),
                line.end.into(),
            ])),
            Geometry::LineString(line) => Geom::LineString(line.into()),
            Geometry::Polygon(polygon) => Geom::Polygon(polygon.try_into()?),
            Geometry::MultiPoint(points) => Geom::Collection(
                points
                    .into_iter()
                    .map(|p| Geom::Point(p.into()))
                    .collect(),
            ),
            Geometry::MultiLineString(lines) => Geom::Collection(
                lines
                    .into_iter()
                    .map(|line| Geom::LineString(line.into()))
                    .collect(),
            ),
            Geometry::MultiPolygon(polygons) => Geom::Collection(GeometryCollection::new(
                polygons
                    .into_iter()
                    .map(|polygon| polygon.try_into().map(Geom::Polygon))
                    .collect::<Result<_, _>>()?,
            )),
            Geometry::GeometryCollection(collection) => Geom::Collection(GeometryCollection::new(
                collection
                    .into_iter()
                    .map(Geom::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            Geometry::Rect(rect) => Geom::Polygon(rect.to_polygon().try_into()?),
            Geometry::Triangle(triangle) => Geom::Polygon(triangle.to_polygon().try_into()?),
        })
    }
}
