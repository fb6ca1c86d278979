//! Centroids of areal, lineal and point geometries.
//!
//! Each centroid is computed by folding the primitive members of a geometry into an accumulator, so the functions
//! accept any nesting of collections.

use crate::algorithm::cg::is_ccw;
use crate::cartesian::{CartesianPoint2dFloat, Coord};
use crate::contour::LinearRing;
use crate::error::TopologyError;
use crate::geometry::{Dimension, Geom};
use crate::polygon::Polygon;

/// Centroid of the geometry computed from its members of the highest dimension.
///
/// If the geometry has polygons, the area centroid is returned. If all the polygons have zero area, or there are
/// none, the length-weighted centroid of lines is used, and if all lines have zero length, the average of points.
/// Returns `None` for an empty geometry.
pub fn centroid(geom: &Geom) -> Result<Option<Coord>, TopologyError> {
    let dimension = geom.dimension();

    if dimension == Dimension::Area {
        if let Some(centroid) = area_centroid(geom)? {
            return Ok(Some(centroid));
        }
    }

    if dimension >= Dimension::Line {
        if let Some(centroid) = line_centroid(geom) {
            return Ok(Some(centroid));
        }
    }

    Ok(point_centroid(geom).or_else(|| vertex_centroid(geom)))
}

/// Centroid of all polygons of the geometry. Other members are ignored.
///
/// The polygons are split into triangles sharing one base point (the first coordinate of the first polygon). The
/// centroid is the average of the triangle centroids weighted by their signed areas, where the sign of each ring is
/// chosen from its orientation so that shells add area and holes subtract it.
///
/// Returns `None` if the total area is zero. Fails if one of the rings is malformed.
pub fn area_centroid(geom: &Geom) -> Result<Option<Coord>, TopologyError> {
    let accumulator = geom
        .iter_primitives()
        .filter_map(|g| match g {
            Geom::Polygon(polygon) => Some(polygon),
            _ => None,
        })
        .try_fold(AreaAccumulator::default(), AreaAccumulator::add_polygon)?;

    Ok(accumulator.centroid())
}

/// Centroid of all lines of the geometry (polygon rings are treated as lines): the average of segment midpoints
/// weighted by segment lengths.
///
/// Returns `None` if the total length is zero.
pub fn line_centroid(geom: &Geom) -> Option<Coord> {
    let (weighted_x, weighted_y, total_length) = geom
        .iter_primitives()
        .flat_map(lineal_parts)
        .flat_map(|points| points.windows(2))
        .fold((0.0, 0.0, 0.0), |(x, y, total), w| {
            let length = w[0].distance(&w[1]);
            (
                x + length * (w[0].x + w[1].x) / 2.0,
                y + length * (w[0].y + w[1].y) / 2.0,
                total + length,
            )
        });

    if total_length == 0.0 {
        return None;
    }

    Some(Coord::new(
        weighted_x / total_length,
        weighted_y / total_length,
    ))
}

fn lineal_parts(geom: &Geom) -> Vec<&[Coord]> {
    match geom {
        Geom::LineString(line) => vec![line.points()],
        Geom::Polygon(polygon) => polygon.iter_rings().map(LinearRing::points).collect(),
        _ => vec![],
    }
}

/// Average of all point members of the geometry. Other members are ignored.
///
/// Returns `None` if the geometry has no points.
pub fn point_centroid(geom: &Geom) -> Option<Coord> {
    let accumulator = geom
        .iter_primitives()
        .filter_map(|g| match g {
            Geom::Point(p) => Some(p),
            _ => None,
        })
        .fold(PointAccumulator::default(), PointAccumulator::add);

    accumulator.centroid()
}

/// Average of all coordinates of the geometry. Used for degenerate geometries without area or length.
fn vertex_centroid(geom: &Geom) -> Option<Coord> {
    geom.coordinates()
        .iter()
        .fold(PointAccumulator::default(), PointAccumulator::add)
        .centroid()
}

#[derive(Debug, Default, Copy, Clone)]
struct PointAccumulator {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl PointAccumulator {
    fn add(self, p: &Coord) -> Self {
        Self {
            sum_x: self.sum_x + p.x,
            sum_y: self.sum_y + p.y,
            count: self.count + 1,
        }
    }

    fn centroid(&self) -> Option<Coord> {
        if self.count == 0 {
            return None;
        }

        let count = self.count as f64;
        Some(Coord::new(self.sum_x / count, self.sum_y / count))
    }
}

#[derive(Debug, Default, Copy, Clone)]
struct AreaAccumulator {
    base: Option<Coord>,
    // Doubled signed area of all triangles
    area_sum2: f64,
    // Sum of triangle vertex sums (three times the centroids) weighted by doubled areas
    cg3_x: f64,
    cg3_y: f64,
}

impl AreaAccumulator {
    fn add_polygon(self, polygon: &Polygon) -> Result<Self, TopologyError> {
        let Some(first) = polygon.shell().first() else {
            return Ok(self);
        };

        let base = self.base.unwrap_or(*first);
        let mut accumulator = Self {
            base: Some(base),
            ..self
        };

        let shell = polygon.shell();
        accumulator = accumulator.add_ring(&base, shell, !is_ccw(shell)?);
        for hole in polygon.holes().iter().filter(|hole| !hole.is_empty()) {
            accumulator = accumulator.add_ring(&base, hole, is_ccw(hole)?);
        }

        Ok(accumulator)
    }

    fn add_ring(self, base: &Coord, ring: &[Coord], is_positive_area: bool) -> Self {
        let sign = if is_positive_area { 1.0 } else { -1.0 };
        ring.windows(2).fold(self, |accumulator, w| {
            accumulator.add_triangle(base, &w[0], &w[1], sign)
        })
    }

    fn add_triangle(self, p0: &Coord, p1: &Coord, p2: &Coord, sign: f64) -> Self {
        let area2 = (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y);
        let weight = sign * area2;

        Self {
            area_sum2: self.area_sum2 + weight,
            cg3_x: self.cg3_x + weight * (p0.x + p1.x + p2.x),
            cg3_y: self.cg3_y + weight * (p0.y + p1.y + p2.y),
            ..self
        }
    }

    fn centroid(&self) -> Option<Coord> {
        if self.area_sum2 == 0.0 {
            return None;
        }

        Some(Coord::new(
            self.cg3_x / 3.0 / self.area_sum2,
            self.cg3_y / 3.0 / self.area_sum2,
        ))
    }
}
