use std::cmp::Ordering;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianPoint2d, NewCartesianPoint2d};

/// A coordinate in 2d cartesian space.
///
/// The coordinate can carry an elevation (`z`) and a measure (`m`). Neither is used by the algorithms of the crate,
/// they are only passed through. Equality (`==`) compares `x` and `y` only, use [`Coord::equals_3d`] to also compare
/// the elevation.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Elevation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Measure value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
}

impl Coord {
    /// Creates a new 2d coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Creates a new coordinate with elevation.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Returns a copy of the coordinate with the given measure value.
    pub fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }

    /// Same as `==`: compares `x` and `y` only.
    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Compares `x`, `y` and `z`. Two coordinates without elevation are equal if their `x` and `y` are equal.
    pub fn equals_3d(&self, other: &Coord) -> bool {
        self.equals_2d(other) && self.z == other.z
    }

    /// Orders coordinates by `x` first, then by `y`.
    ///
    /// Coordinates equal in 2D compare as [`Ordering::Equal`], so `0.0` and `-0.0` are not told apart. Coordinates
    /// must be finite: `NaN` compares equal to anything.
    pub fn compare_xy(&self, other: &Coord) -> Ordering {
        compare_f64(self.x, other.x).then_with(|| compare_f64(self.y, other.y))
    }

    /// Returns a copy of the coordinate moved by `(dx, dy)`. Elevation and measure are kept.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.equals_2d(other)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl CartesianPoint2d for Coord {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl NewCartesianPoint2d<f64> for Coord {
    fn new(x: f64, y: f64) -> Self {
        Coord::new(x, y)
    }
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// Sorts the coordinates by [`Coord::compare_xy`] and removes exact duplicates.
pub fn unique_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> Vec<Coord> {
    let mut unique: Vec<Coord> = coords.into_iter().copied().collect();
    unique.sort_by(Coord::compare_xy);
    unique.dedup();
    unique
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_elevation() {
        let a = Coord::new_3d(1.0, 2.0, 3.0);
        let b = Coord::new(1.0, 2.0);
        assert_eq!(a, b);
        assert!(!a.equals_3d(&b));
        assert!(a.equals_3d(&Coord::new_3d(1.0, 2.0, 3.0)));
    }

    #[test]
    fn compare_xy() {
        let a = Coord::new(1.0, 5.0);
        let b = Coord::new(2.0, 0.0);
        let c = Coord::new(1.0, 6.0);
        assert_eq!(a.compare_xy(&b), Ordering::Less);
        assert_eq!(a.compare_xy(&c), Ordering::Less);
        assert_eq!(b.compare_xy(&c), Ordering::Greater);
        assert_eq!(a.compare_xy(&a), Ordering::Equal);
    }

    #[test]
    fn signed_zeros_are_unique() {
        let coords = vec![
            Coord::new(-0.0, 1.0),
            Coord::new(0.0, 0.5),
            Coord::new(0.0, 1.0),
        ];
        assert_eq!(Coord::new(-0.0, 1.0).compare_xy(&Coord::new(0.0, 1.0)), Ordering::Equal);
        assert_eq!(
            unique_coordinates(&coords),
            vec![Coord::new(0.0, 0.5), Coord::new(0.0, 1.0)]
        );
    }

    #[test]
    fn unique() {
        let coords = vec![
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new_3d(0.0, 0.0, 10.0),
        ];
        assert_eq!(
            unique_coordinates(&coords),
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(0.0, 1.0),
                Coord::new(1.0, 1.0)
            ]
        );
    }

    #[test]
    fn translate_keeps_measure() {
        let c = Coord::new_3d(1.0, 1.0, 4.0).with_m(7.0);
        let moved = c.translate(1.0, -1.0);
        assert_eq!(moved, Coord::new(2.0, 0.0));
        assert_eq!(moved.z, Some(4.0));
        assert_eq!(moved.m, Some(7.0));
    }

    #[test]
    fn generic_point_api() {
        use crate::cartesian::CartesianPoint2dFloat;

        fn mirror<P: NewCartesianPoint2d<f64>>(p: &P) -> P {
            P::new(-p.x(), -p.y())
        }

        let c = mirror(&Coord::new(1.0, 2.0));
        assert_eq!(c, Coord::new(-1.0, -2.0));

        let p = mirror(&nalgebra::Point2::new(1.0, 2.0));
        assert!(c.equal(&p));
        assert_eq!(c.to_point2(), p);
        assert_eq!(c.distance(&Coord::new(2.0, 2.0)), 5.0);
    }

    #[test]
    fn serialize() {
        let c = Coord::new(1.5, 2.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert!(back.equals_3d(&c));
    }
}
