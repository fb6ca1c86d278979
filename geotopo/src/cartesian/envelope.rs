use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::CartesianPoint2d;
use crate::cartesian::Coord;

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd> Envelope<N> {
    /// Creates a new envelope. Min and max values are swapped if given in the wrong order.
    pub fn new(x1: N, y1: N, x2: N, y2: N) -> Self {
        let (x_min, x_max) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y_min, y_max) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the envelope.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the envelope.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Envelope of a single point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Envelope of a segment.
    pub fn from_segment(
        p1: &impl CartesianPoint2d<Num = N>,
        p2: &impl CartesianPoint2d<Num = N>,
    ) -> Self {
        Self::new(p1.x(), p1.y(), p2.x(), p2.y())
    }

    /// Envelope of all the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut envelope = Self::from_point(first);
        for p in points {
            envelope.expand_to_include(p);
        }

        Some(envelope)
    }

    /// Grows the envelope to contain the point.
    pub fn expand_to_include(&mut self, p: &impl CartesianPoint2d<Num = N>) {
        if self.x_min > p.x() {
            self.x_min = p.x();
        }
        if self.y_min > p.y() {
            self.y_min = p.y();
        }
        if self.x_max < p.x() {
            self.x_max = p.x();
        }
        if self.y_max < p.y() {
            self.y_max = p.y();
        }
    }

    /// Smallest envelope containing both envelopes.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Envelope containing all the given envelopes, or `None` if the iterator is empty.
    pub fn merge_all(envelopes: impl IntoIterator<Item = Self>) -> Option<Self> {
        envelopes.into_iter().reduce(|acc, next| acc.merge(next))
    }

    /// Common part of the two envelopes, or `None` if they do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self {
            x_min: if self.x_min > other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min > other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max < other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max < other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        })
    }

    /// Returns true if the point is inside the envelope or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if the `other` envelope lies completely inside this one.
    pub fn contains_envelope(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// Returns true if the envelopes have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.x_min > self.x_max
            || other.x_max < self.x_min
            || other.y_min > self.y_max
            || other.y_max < self.y_min)
    }

    /// Center of the envelope.
    pub fn center(&self) -> (N, N) {
        let two = N::one() + N::one();
        (
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Returns true if the point `q` lies in the envelope of the segment `p1`-`p2`.
    pub fn intersects_segment_point(
        p1: &impl CartesianPoint2d<Num = N>,
        p2: &impl CartesianPoint2d<Num = N>,
        q: &impl CartesianPoint2d<Num = N>,
    ) -> bool {
        Self::from_segment(p1, p2).contains(q)
    }

    /// Returns true if the envelopes of segments `p1`-`p2` and `q1`-`q2` intersect.
    pub fn segments_intersect(
        p1: &impl CartesianPoint2d<Num = N>,
        p2: &impl CartesianPoint2d<Num = N>,
        q1: &impl CartesianPoint2d<Num = N>,
        q2: &impl CartesianPoint2d<Num = N>,
    ) -> bool {
        Self::from_segment(p1, p2).intersects(&Self::from_segment(q1, q2))
    }
}

impl Envelope<f64> {
    /// Center of the envelope as a coordinate.
    pub fn center_coord(&self) -> Coord {
        let (x, y) = self.center();
        Coord::new(x, y)
    }
}
