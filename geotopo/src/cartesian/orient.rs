use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Coord};

/// Sign of the determinant of the matrix `[[x1, y1], [x2, y2]]`.
///
/// Returns `1` if the determinant is positive, `-1` if negative and `0` if it is zero. The two products are compared
/// directly instead of subtracting them, so the sign is exact for the rounded products.
pub fn sign_of_det_2x2<N: Num + Copy + PartialOrd>(x1: N, y1: N, x2: N, y2: N) -> i32 {
    let left = x1 * y2;
    let right = y1 * x2;
    if left > right {
        1
    } else if left < right {
        -1
    } else {
        0
    }
}

/// Orientation of the point `q` relative to the directed line `p1`->`p2`.
///
/// * `1` - `q` is to the left of the line (counter-clockwise turn)
/// * `-1` - `q` is to the right of the line (clockwise turn)
/// * `0` - the points are collinear
pub fn orientation_index<N: Num + Copy + PartialOrd>(
    p1: &impl CartesianPoint2d<Num = N>,
    p2: &impl CartesianPoint2d<Num = N>,
    q: &impl CartesianPoint2d<Num = N>,
) -> i32 {
    let dx1 = p2.x() - p1.x();
    let dy1 = p2.y() - p1.y();
    let dx2 = q.x() - p2.x();
    let dy2 = q.y() - p2.y();
    sign_of_det_2x2(dx1, dy1, dx2, dy2)
}

/// Exact orientation of the point `q` relative to the directed line `p1`->`p2`, with the same return values as
/// [`orientation_index`].
///
/// Unlike [`orientation_index`], the sign is computed with adaptive precision arithmetic and is correct for any
/// finite input, so orderings built on it are consistent even for nearly collinear points.
pub fn robust_orientation_index(p1: &Coord, p2: &Coord, q: &Coord) -> i32 {
    let orientation = robust::orient2d(
        robust::Coord { x: p1.x, y: p1.y },
        robust::Coord { x: p2.x, y: p2.y },
        robust::Coord { x: q.x, y: q.y },
    );

    if orientation > 0.0 {
        1
    } else if orientation < 0.0 {
        -1
    } else {
        0
    }
}

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    pub fn triplet<N: Num + Copy + PartialOrd>(
        p: &impl CartesianPoint2d<Num = N>,
        q: &impl CartesianPoint2d<Num = N>,
        r: &impl CartesianPoint2d<Num = N>,
    ) -> Self {
        Self::from_index(orientation_index(p, q, r))
    }

    /// Converts the value returned by [`orientation_index`] into `Orientation`.
    pub fn from_index(index: i32) -> Self {
        match index {
            i if i > 0 => Self::Counterclockwise,
            i if i < 0 => Self::Clockwise,
            _ => Self::Collinear,
        }
    }

    /// Numeric value of the orientation as returned by [`orientation_index`].
    pub fn index(&self) -> i32 {
        match self {
            Self::Counterclockwise => 1,
            Self::Clockwise => -1,
            Self::Collinear => 0,
        }
    }

    /// Opposite orientation.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Counterclockwise => Self::Clockwise,
            Self::Clockwise => Self::Counterclockwise,
            Self::Collinear => Self::Collinear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn det_sign() {
        assert_eq!(sign_of_det_2x2(1.0, 0.0, 0.0, 1.0), 1);
        assert_eq!(sign_of_det_2x2(0.0, 1.0, 1.0, 0.0), -1);
        assert_eq!(sign_of_det_2x2(2.0, 4.0, 1.0, 2.0), 0);
        assert_eq!(sign_of_det_2x2(3, 1, 1, 1), 1);
    }

    #[test]
    fn orientation() {
        let p1 = Coord::new(0.0, 0.0);
        let p2 = Coord::new(10.0, 0.0);
        assert_eq!(orientation_index(&p1, &p2, &Coord::new(5.0, 1.0)), 1);
        assert_eq!(orientation_index(&p1, &p2, &Coord::new(5.0, -1.0)), -1);
        assert_eq!(orientation_index(&p1, &p2, &Coord::new(20.0, 0.0)), 0);
        assert_eq!(orientation_index(&p2, &p1, &Coord::new(5.0, 1.0)), -1);

        assert_eq!(
            Orientation::triplet(&p1, &p2, &Coord::new(5.0, 1.0)),
            Orientation::Counterclockwise
        );
        assert_eq!(
            Orientation::triplet(&p1, &p2, &Coord::new(5.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            Orientation::triplet(&p1, &p2, &Coord::new(-5.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn robust_orientation() {
        let p1 = Coord::new(0.0, 0.0);
        let p2 = Coord::new(10.0, 0.0);
        assert_eq!(robust_orientation_index(&p1, &p2, &Coord::new(5.0, 1.0)), 1);
        assert_eq!(robust_orientation_index(&p1, &p2, &Coord::new(5.0, -1.0)), -1);
        assert_eq!(robust_orientation_index(&p1, &p2, &Coord::new(20.0, 0.0)), 0);

        let p1 = Coord::new(0.5, 0.5);
        let p2 = Coord::new(12.0, 12.0);
        let q = Coord::new(24.0, 24.0 + 24.0 * f64::EPSILON);
        assert_eq!(robust_orientation_index(&p1, &p2, &q), 1);
        assert_eq!(robust_orientation_index(&p2, &p1, &q), -1);
    }

    #[test]
    fn orientation_of_other_point_types() {
        let a = Point2::new(0i64, 0);
        let b = Point2::new(4i64, 4);
        assert_eq!(orientation_index(&a, &b, &Point2::new(0i64, 4)), 1);
        assert_eq!(orientation_index(&a, &b, &Point2::new(8i64, 8)), 0);
    }

    #[test]
    fn index_round_trip() {
        for o in [
            Orientation::Clockwise,
            Orientation::Counterclockwise,
            Orientation::Collinear,
        ] {
            assert_eq!(Orientation::from_index(o.index()), o);
            assert_eq!(o.reverse().index(), -o.index());
        }
    }
}
