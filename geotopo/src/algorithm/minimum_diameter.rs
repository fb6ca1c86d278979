//! Minimum width of a geometry.

use crate::algorithm::ConvexHull;
use crate::cartesian::Coord;
use crate::contour::LineString;
use crate::geometry::Geom;
use crate::segment::LineSegment;

/// Minimum diameter (minimum width) of a geometry: the smallest distance between two parallel lines enclosing it.
///
/// One of the enclosing lines always goes through an edge of the convex hull, called the supporting segment. The
/// other one goes through the hull vertex farthest from that edge.
///
/// ```
/// use geotopo::algorithm::MinimumDiameter;
/// use geotopo::{Coord, Geom, Polygon};
///
/// let square = Polygon::from_coords(
///     [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)].map(Coord::from).to_vec(),
/// ).unwrap();
/// let diameter = MinimumDiameter::new(&Geom::Polygon(square));
/// assert_eq!(diameter.width(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumDiameter {
    width: f64,
    width_coordinate: Option<Coord>,
    supporting_segment: Option<LineSegment>,
}

impl MinimumDiameter {
    /// Computes the minimum diameter of any geometry. The convex hull of the geometry is calculated first.
    pub fn new(geom: &Geom) -> Self {
        let hull = ConvexHull::from_geometry(geom).convex_hull();
        Self::new_convex(&hull)
    }

    /// Computes the minimum diameter of a geometry that is known to be convex.
    ///
    /// For a polygon, its shell must be a convex ring without repeated points. For other geometries the coordinates
    /// are treated as such a ring. If the geometry is not convex, the result is not meaningful.
    pub fn new_convex(geom: &Geom) -> Self {
        let points = match geom {
            Geom::Polygon(polygon) => polygon.shell().to_vec(),
            other => other.coordinates(),
        };

        match points.len() {
            0 => Self {
                width: 0.0,
                width_coordinate: None,
                supporting_segment: None,
            },
            1 => Self {
                width: 0.0,
                width_coordinate: Some(points[0]),
                supporting_segment: Some(LineSegment::new(points[0], points[0])),
            },
            2 | 3 => Self {
                width: 0.0,
                width_coordinate: Some(points[0]),
                supporting_segment: Some(LineSegment::new(points[0], points[1])),
            },
            _ => Self::convex_ring_min_diameter(&points),
        }
    }

    fn convex_ring_min_diameter(ring: &[Coord]) -> Self {
        let mut result = Self {
            width: f64::MAX,
            width_coordinate: None,
            supporting_segment: None,
        };

        let mut max_index = 1;
        for w in ring.windows(2) {
            let segment = LineSegment::new(w[0], w[1]);
            let (index, distance) = max_perpendicular_distance(ring, &segment, max_index);
            max_index = index;

            if distance < result.width {
                result = Self {
                    width: distance,
                    width_coordinate: Some(ring[index]),
                    supporting_segment: Some(segment),
                };
            }
        }

        result
    }

    /// Minimum width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Hull vertex at the minimum width distance from the supporting segment. `None` for an empty geometry.
    pub fn width_coordinate(&self) -> Option<Coord> {
        self.width_coordinate
    }

    /// Hull edge the minimum width is measured from. `None` for an empty geometry.
    pub fn supporting_segment(&self) -> Option<LineSegment> {
        self.supporting_segment
    }

    /// Line from the projection of the width coordinate onto the supporting segment to the width coordinate. Its
    /// length is the minimum width. The line is empty for an empty geometry.
    pub fn diameter(&self) -> LineString {
        match (&self.width_coordinate, &self.supporting_segment) {
            (Some(p), Some(segment)) => LineString::new(vec![segment.project(p), *p]),
            _ => LineString::new(vec![]),
        }
    }
}

/// Walks the ring forward from `start_index` while the perpendicular distance to the segment does not decrease.
/// Returns the index of the farthest point found and its distance.
fn max_perpendicular_distance(ring: &[Coord], segment: &LineSegment, start_index: usize) -> (usize, f64) {
    let mut max_distance = segment.distance_perpendicular(&ring[start_index]);
    let mut next_distance = max_distance;
    let mut max_index = start_index;
    let mut next_index = max_index;

    while next_distance >= max_distance {
        max_distance = next_distance;
        max_index = next_index;

        next_index = next_ring_index(ring, max_index);
        if next_index == start_index {
            break;
        }
        next_distance = segment.distance_perpendicular(&ring[next_index]);
    }

    (max_index, max_distance)
}

/// Next vertex index of a closed ring, skipping the closing coordinate.
fn next_ring_index(ring: &[Coord], index: usize) -> usize {
    let next = index + 1;
    if next >= ring.len() - 1 {
        0
    } else {
        next
    }
}
