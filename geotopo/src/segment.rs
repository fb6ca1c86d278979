//! Line segments and their measures.

use serde::{Deserialize, Serialize};

use crate::algorithm::cg;
use crate::cartesian::{orientation_index, CartesianPoint2d, CartesianPoint2dFloat, Coord, Envelope};

/// A straight line segment between two points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point.
    pub p0: Coord,
    /// End point.
    pub p1: Coord,
}

impl LineSegment {
    /// Creates a new segment.
    pub fn new(p0: Coord, p1: Coord) -> Self {
        Self { p0, p1 }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.p0.distance(&self.p1)
    }

    /// Returns true if both endpoints are the same.
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    /// Middle point of the segment.
    pub fn midpoint(&self) -> Coord {
        Coord::new((self.p0.x + self.p1.x) / 2.0, (self.p0.y + self.p1.y) / 2.0)
    }

    /// Bounding box of the segment.
    pub fn envelope(&self) -> Envelope {
        Envelope::from_segment(&self.p0, &self.p1)
    }

    /// Orientation of the point relative to the segment direction. See [`orientation_index`].
    pub fn orientation_index(&self, p: &Coord) -> i32 {
        orientation_index(&self.p0, &self.p1, p)
    }

    /// Shortest distance between the point and the segment.
    pub fn distance_point(&self, p: &Coord) -> f64 {
        cg::distance_point_line(p, &self.p0, &self.p1)
    }

    /// Distance between the point and the infinite line through the segment.
    pub fn distance_perpendicular(&self, p: &Coord) -> f64 {
        cg::distance_point_line_perpendicular(p, &self.p0, &self.p1)
    }

    /// Shortest distance between two segments.
    pub fn distance(&self, other: &LineSegment) -> f64 {
        cg::distance_line_line(&self.p0, &self.p1, &other.p0, &other.p1)
    }

    /// Position of the projection of `p` onto the line through the segment, as a fraction of the segment:
    ///
    /// * `0` - the projection is `p0`
    /// * `1` - the projection is `p1`
    /// * `< 0` or `> 1` - the projection is outside of the segment
    ///
    /// Returns `0` for a degenerate segment.
    pub fn projection_factor(&self, p: &Coord) -> f64 {
        if p == &self.p0 {
            return 0.0;
        }
        if p == &self.p1 {
            return 1.0;
        }

        let ds = self.p1.sub(&self.p0);
        let len_sq = ds.norm_squared();
        if len_sq == 0.0 {
            return 0.0;
        }

        p.sub(&self.p0).dot(&ds) / len_sq
    }

    /// Projection of `p` onto the line through the segment. The result can be outside of the segment.
    pub fn project(&self, p: &Coord) -> Coord {
        if p == &self.p0 || p == &self.p1 {
            return *p;
        }

        let r = self.projection_factor(p);
        Coord::new(
            self.p0.x + r * (self.p1.x - self.p0.x),
            self.p0.y + r * (self.p1.y - self.p0.y),
        )
    }

    /// Segment with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Coord::new(x0, y0), Coord::new(x1, y1))
    }

    #[test]
    fn distances() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.distance_point(&Coord::new(5.0, 3.0)), 3.0);
        assert_eq!(s.distance_point(&Coord::new(13.0, 4.0)), 5.0);
        assert_eq!(s.distance_perpendicular(&Coord::new(13.0, 4.0)), 4.0);
        assert_eq!(s.distance_perpendicular(&Coord::new(-3.0, -4.0)), 4.0);
        assert_eq!(s.length(), 10.0);
    }

    #[test]
    fn projection() {
        let s = seg(0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(s.projection_factor(&Coord::new(10.0, 0.0)), 0.5);
        assert_abs_diff_eq!(s.project(&Coord::new(10.0, 0.0)), Coord::new(5.0, 5.0));
        assert_abs_diff_eq!(s.projection_factor(&Coord::new(20.0, 20.0)), 2.0);
        assert_eq!(s.project(&s.p1), s.p1);
        assert_eq!(seg(1.0, 1.0, 1.0, 1.0).projection_factor(&Coord::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn midpoint_and_orientation() {
        let s = seg(0.0, 0.0, 4.0, 2.0);
        assert_eq!(s.midpoint(), Coord::new(2.0, 1.0));
        assert_eq!(s.orientation_index(&Coord::new(0.0, 5.0)), 1);
        assert_eq!(s.reversed().orientation_index(&Coord::new(0.0, 5.0)), -1);
        assert!(!s.is_degenerate());
    }
}
