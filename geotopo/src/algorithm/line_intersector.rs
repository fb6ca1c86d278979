//! Robust intersection of points and line segments.

use serde::{Deserialize, Serialize};

use crate::cartesian::{orientation_index, CartesianPoint2dFloat, Coord, Envelope};
use crate::error::TopologyError;
use crate::precision::PrecisionModel;

/// Result of an intersection computation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineIntersection {
    /// The inputs have no common points.
    None,
    /// The inputs have exactly one common point.
    Point {
        /// Intersection point.
        point: Coord,
        /// The intersection point lies in the interior of both segments: it is not an endpoint of either of them.
        is_proper: bool,
    },
    /// Collinear segments that overlap along a sub-segment with two distinct endpoints.
    Collinear(Coord, Coord),
}

impl LineIntersection {
    /// Returns true if the inputs have at least one common point.
    pub fn has_intersection(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Number of intersection points: 0, 1 or 2 (the endpoints of the common sub-segment of collinear segments).
    pub fn intersection_num(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Point { .. } => 1,
            Self::Collinear(..) => 2,
        }
    }

    /// Intersection points.
    pub fn points(&self) -> Vec<Coord> {
        match self {
            Self::None => vec![],
            Self::Point { point, .. } => vec![*point],
            Self::Collinear(a, b) => vec![*a, *b],
        }
    }

    /// Returns true for a proper point intersection.
    pub fn is_proper(&self) -> bool {
        matches!(self, Self::Point { is_proper: true, .. })
    }

    /// Returns true if the segments overlap along a sub-segment.
    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::Collinear(..))
    }

    /// Returns true if any of the intersection points is not an endpoint of the segment `p1`-`p2`.
    pub fn is_interior_intersection(&self, p1: &Coord, p2: &Coord) -> bool {
        self.points().iter().any(|p| p != p1 && p != p2)
    }
}

/// Computes intersections of points and segments.
///
/// Orientation tests are used to classify the intersection, so classification is exact for the given input. The
/// intersection point of two segments crossing in their interiors is computed with homogeneous coordinates after
/// moving the segments so that the centre of their common envelope is at the origin, which limits the loss of
/// precision for coordinates far from the origin.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustLineIntersector {
    precision_model: PrecisionModel,
}

impl RobustLineIntersector {
    /// Creates a new intersector with floating precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new intersector snapping computed points to the given precision model.
    pub fn with_precision_model(precision_model: PrecisionModel) -> Self {
        Self { precision_model }
    }

    /// Precision model of the intersector.
    pub fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }

    /// Tests if the point `p` lies on the segment `p1`-`p2`.
    ///
    /// The intersection is proper unless `p` is one of the segment endpoints.
    pub fn intersect_point(&self, p: &Coord, p1: &Coord, p2: &Coord) -> LineIntersection {
        if Envelope::intersects_segment_point(p1, p2, p)
            && orientation_index(p1, p2, p) == 0
            && orientation_index(p2, p1, p) == 0
        {
            let is_proper = p != p1 && p != p2;
            return LineIntersection::Point {
                point: *p,
                is_proper,
            };
        }

        LineIntersection::None
    }

    /// Computes the intersection of segments `p1`-`p2` and `q1`-`q2`.
    pub fn intersect_segments(
        &self,
        p1: &Coord,
        p2: &Coord,
        q1: &Coord,
        q2: &Coord,
    ) -> LineIntersection {
        if !Envelope::segments_intersect(p1, p2, q1, q2) {
            return LineIntersection::None;
        }

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);
        if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
            return LineIntersection::None;
        }

        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);
        if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
            return LineIntersection::None;
        }

        if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
            return collinear_intersection(p1, p2, q1, q2);
        }

        // One of the endpoints lies on the other segment. The endpoint is returned as is to keep its exact value.
        if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
            let point = if qp2 == 0 {
                *p2
            } else if qp1 == 0 {
                *p1
            } else if pq2 == 0 {
                *q2
            } else {
                *q1
            };

            return LineIntersection::Point {
                point,
                is_proper: false,
            };
        }

        LineIntersection::Point {
            point: self.proper_intersection(p1, p2, q1, q2),
            is_proper: true,
        }
    }

    fn proper_intersection(&self, p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> Coord {
        let (dx, dy) = envelope_intersection_center(p1, p2, q1, q2);
        let n1 = p1.translate(-dx, -dy);
        let n2 = p2.translate(-dx, -dy);
        let n3 = q1.translate(-dx, -dy);
        let n4 = q2.translate(-dx, -dy);

        let point = match homogeneous_intersection(&n1, &n2, &n3, &n4) {
            Ok(point) => point.translate(dx, dy),
            Err(err) => {
                log::debug!(
                    "Falling back to nearest endpoint for intersection of {p1:?}-{p2:?} and {q1:?}-{q2:?}: {err}"
                );
                central_endpoint(p1, p2, q1, q2)
            }
        };

        if !is_in_segment_envelopes(&point, p1, p2, q1, q2) {
            log::warn!(
                "Computed intersection {point:?} of {p1:?}-{p2:?} and {q1:?}-{q2:?} is outside of segment envelopes"
            );
        }

        self.precision_model.make_precise(&point)
    }
}

fn collinear_intersection(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> LineIntersection {
    let p1q1p2 = Envelope::intersects_segment_point(p1, p2, q1);
    let p1q2p2 = Envelope::intersects_segment_point(p1, p2, q2);
    let q1p1q2 = Envelope::intersects_segment_point(q1, q2, p1);
    let q1p2q2 = Envelope::intersects_segment_point(q1, q2, p2);

    let overlap = |a: &Coord, b: &Coord, single_point: bool| {
        if single_point {
            LineIntersection::Point {
                point: *a,
                is_proper: false,
            }
        } else {
            LineIntersection::Collinear(*a, *b)
        }
    };

    if p1q1p2 && p1q2p2 {
        return LineIntersection::Collinear(*q1, *q2);
    }
    if q1p1q2 && q1p2q2 {
        return LineIntersection::Collinear(*p1, *p2);
    }
    if p1q1p2 && q1p1q2 {
        return overlap(q1, p1, q1 == p1 && !p1q2p2 && !q1p2q2);
    }
    if p1q1p2 && q1p2q2 {
        return overlap(q1, p2, q1 == p2 && !p1q2p2 && !q1p1q2);
    }
    if p1q2p2 && q1p1q2 {
        return overlap(q2, p1, q2 == p1 && !p1q1p2 && !q1p2q2);
    }
    if p1q2p2 && q1p2q2 {
        return overlap(q2, p2, q2 == p2 && !p1q1p2 && !q1p1q2);
    }

    LineIntersection::None
}

/// Center of the intersection of the envelopes of the two segments.
fn envelope_intersection_center(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> (f64, f64) {
    let p_env = Envelope::from_segment(p1, p2);
    let q_env = Envelope::from_segment(q1, q2);

    let x_min = p_env.x_min().max(q_env.x_min());
    let x_max = p_env.x_max().min(q_env.x_max());
    let y_min = p_env.y_min().max(q_env.y_min());
    let y_max = p_env.y_max().min(q_env.y_max());

    ((x_min + x_max) / 2.0, (y_min + y_max) / 2.0)
}

/// Intersection of the infinite lines through `p1`-`p2` and `q1`-`q2` computed with homogeneous coordinates.
fn homogeneous_intersection(
    p1: &Coord,
    p2: &Coord,
    q1: &Coord,
    q2: &Coord,
) -> Result<Coord, TopologyError> {
    let px = p1.y - p2.y;
    let py = p2.x - p1.x;
    let pw = p1.x * p2.y - p2.x * p1.y;

    let qx = q1.y - q2.y;
    let qy = q2.x - q1.x;
    let qw = q1.x * q2.y - q2.x * q1.y;

    let x = py * qw - qy * pw;
    let y = qx * pw - px * qw;
    let w = px * qy - qx * py;

    let x_int = x / w;
    let y_int = y / w;

    if !x_int.is_finite() || !y_int.is_finite() {
        return Err(TopologyError::NotRepresentable);
    }

    Ok(Coord::new(x_int, y_int))
}

/// Endpoint closest to the average of all four endpoints.
fn central_endpoint(p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> Coord {
    let points = [p1, p2, q1, q2];
    let center = Coord::new(
        points.iter().map(|p| p.x).sum::<f64>() / 4.0,
        points.iter().map(|p| p.y).sum::<f64>() / 4.0,
    );

    let mut nearest = p1;
    let mut min_distance = f64::MAX;
    for p in points {
        let distance = p.distance(&center);
        if distance < min_distance {
            min_distance = distance;
            nearest = p;
        }
    }

    *nearest
}

fn is_in_segment_envelopes(point: &Coord, p1: &Coord, p2: &Coord, q1: &Coord, q2: &Coord) -> bool {
    Envelope::intersects_segment_point(p1, p2, point) && Envelope::intersects_segment_point(q1, q2, point)
}
