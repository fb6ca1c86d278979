use serde::{Deserialize, Serialize};

/// Closed one-dimensional interval `[min, max]`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates a new interval. The bounds are swapped if given in the wrong order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Zero-width interval containing a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length of the interval.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Middle of the interval.
    pub fn centre(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Grows the interval to contain the `other` one.
    pub fn expand_to_include(&mut self, other: &Interval) {
        if other.max > self.max {
            self.max = other.max;
        }
        if other.min < self.min {
            self.min = other.min;
        }
    }

    /// Returns true if the intervals have at least one common value.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.min > other.max || self.max < other.min)
    }

    /// Returns true if the `other` interval lies completely inside this one.
    pub fn contains(&self, other: &Interval) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Returns true if the value lies inside the interval.
    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_and_containment() {
        let a = Interval::new(5.0, 0.0);
        assert_eq!(a.min(), 0.0);
        assert_eq!(a.max(), 5.0);
        assert_eq!(a.centre(), 2.5);

        assert!(a.overlaps(&Interval::new(5.0, 7.0)));
        assert!(!a.overlaps(&Interval::new(5.1, 7.0)));
        assert!(a.overlaps(&Interval::point(3.0)));
        assert!(a.contains(&Interval::new(1.0, 5.0)));
        assert!(!a.contains(&Interval::new(1.0, 6.0)));
        assert!(a.contains_value(0.0));

        let mut b = Interval::point(1.0);
        b.expand_to_include(&Interval::new(-2.0, 0.0));
        assert_eq!(b, Interval::new(-2.0, 1.0));
    }
}
