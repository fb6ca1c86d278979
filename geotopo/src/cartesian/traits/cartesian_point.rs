use nalgebra::{Point2, Scalar, Vector2};
use num_traits::{Bounded, Float, FromPrimitive, Num};

/// A point in 2d cartesian coordinate space.
///
/// Every algorithm of the crate reads coordinates only through this trait, so any point type that can give its `x`
/// and `y` can be used as input.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Returns the point as `nalgebra::Point2`.
    fn to_point2(&self) -> Point2<Self::Num> {
        Point2::new(self.x(), self.y())
    }
}

/// Point type that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Methods for points with floating point coordinates.
pub trait CartesianPoint2dFloat<N: Float = f64>: CartesianPoint2d<Num = N> {
    /// Euclidean distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}
