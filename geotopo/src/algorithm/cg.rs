//! Basic computational geometry predicates and measures on coordinate sequences.

use crate::algorithm::line_intersector::RobustLineIntersector;
use crate::cartesian::{
    orientation_index, sign_of_det_2x2, CartesianPoint2dFloat, Coord, Envelope,
};
use crate::contour::{validate_ring, MIN_RING_SIZE};
use crate::error::TopologyError;

/// Tests whether the point lies inside the ring using the crossing number of a ray cast from the point in positive
/// `x` direction.
///
/// The ring must be closed. The result for points lying exactly on the ring boundary is not specified: such a point
/// can be reported as either inside or outside. No bounding box check is done, see
/// [`McPointInRing`](crate::algorithm::McPointInRing) for an indexed version of the test.
///
/// # Panics
///
/// Panics if the ring is not closed or has fewer than 4 coordinates.
pub fn is_point_in_ring(p: &Coord, ring: &[Coord]) -> bool {
    assert_valid_ring(ring);

    let crossings = ring
        .windows(2)
        .filter(|w| is_ray_crossing(p, &w[1], &w[0]))
        .count();

    crossings % 2 == 1
}

/// Panics if the coordinates do not form a valid ring.
pub(crate) fn assert_valid_ring(ring: &[Coord]) {
    if let Err(err) = validate_ring(ring) {
        panic!("invalid ring for point-in-ring test: {err}");
    }
}

/// Returns true if the segment `p1`-`p2` crosses the horizontal ray going from `p` in positive `x` direction.
///
/// The segment is counted if one of its endpoints is strictly above the ray and the other one is on or below it, so a
/// vertex lying on the ray is counted only once.
pub(crate) fn is_ray_crossing(p: &Coord, p1: &Coord, p2: &Coord) -> bool {
    let x1 = p1.x - p.x;
    let y1 = p1.y - p.y;
    let x2 = p2.x - p.x;
    let y2 = p2.y - p.y;

    if (y1 > 0.0 && y2 <= 0.0) || (y2 > 0.0 && y1 <= 0.0) {
        // sign of the x coordinate of the segment intersection with the ray line
        let x_int = sign_of_det_2x2(x1, y1, x2, y2) as f64 / (y2 - y1);
        x_int > 0.0
    } else {
        false
    }
}

/// Signed area of the ring. The area is positive if the ring is wound counter-clockwise, and negative if it is wound
/// clockwise.
pub fn signed_area(ring: &[Coord]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let sum: f64 = ring
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum();

    sum / 2.0
}

/// Tests if the ring is wound counter-clockwise.
///
/// The test looks at the neighbours of the highest point of the ring, so it gives correct results for rings that
/// self-intersect somewhere else, and for rings with repeated points. A ring that collapses into a line is reported as
/// clockwise.
///
/// Fails if the ring has fewer than 4 coordinates.
pub fn is_ccw(ring: &[Coord]) -> Result<bool, TopologyError> {
    if ring.len() < MIN_RING_SIZE {
        return Err(TopologyError::TooFewPoints {
            expected: MIN_RING_SIZE,
            actual: ring.len(),
        });
    }

    let n_points = ring.len() - 1;

    let mut hi_index = 0;
    for (i, p) in ring.iter().enumerate().take(n_points + 1).skip(1) {
        if p.y > ring[hi_index].y {
            hi_index = i;
        }
    }
    let hi = &ring[hi_index];

    let mut prev_index = hi_index;
    loop {
        prev_index = if prev_index == 0 {
            n_points
        } else {
            prev_index - 1
        };
        if &ring[prev_index] != hi || prev_index == hi_index {
            break;
        }
    }

    let mut next_index = hi_index;
    loop {
        next_index = (next_index + 1) % n_points;
        if &ring[next_index] != hi || next_index == hi_index {
            break;
        }
    }

    let prev = &ring[prev_index];
    let next = &ring[next_index];

    if prev == hi || next == hi || prev == next {
        return Ok(false);
    }

    let orientation = orientation_index(prev, hi, next);
    Ok(if orientation == 0 {
        prev.x > next.x
    } else {
        orientation > 0
    })
}

/// Tests if the point lies on one of the segments of the line.
pub fn is_on_line(p: &Coord, line: &[Coord]) -> bool {
    let intersector = RobustLineIntersector::new();
    line.windows(2)
        .any(|w| intersector.intersect_point(p, &w[0], &w[1]).has_intersection())
}

/// Total length of the line.
pub fn length(line: &[Coord]) -> f64 {
    line.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Shortest distance from the point `p` to the segment `a`-`b`.
///
/// If the segment is degenerate, the distance to its single point is returned.
pub fn distance_point_line(p: &Coord, a: &Coord, b: &Coord) -> f64 {
    if a == b {
        return p.distance(a);
    }

    let len_sq = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
    let r = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / len_sq;

    if r <= 0.0 {
        return p.distance(a);
    }
    if r >= 1.0 {
        return p.distance(b);
    }

    let s = ((a.y - p.y) * (b.x - a.x) - (a.x - p.x) * (b.y - a.y)) / len_sq;
    s.abs() * len_sq.sqrt()
}

/// Distance from the point `p` to the infinite line through `a` and `b`.
///
/// If `a` and `b` are the same point, the distance to this point is returned.
pub fn distance_point_line_perpendicular(p: &Coord, a: &Coord, b: &Coord) -> f64 {
    if a == b {
        return p.distance(a);
    }

    let len_sq = (b.x - a.x) * (b.x - a.x) + (b.y - a.y) * (b.y - a.y);
    let s = ((a.y - p.y) * (b.x - a.x) - (a.x - p.x) * (b.y - a.y)) / len_sq;
    s.abs() * len_sq.sqrt()
}

/// Shortest distance between segments `a`-`b` and `c`-`d`. Zero if the segments intersect.
pub fn distance_line_line(a: &Coord, b: &Coord, c: &Coord, d: &Coord) -> f64 {
    if a == b {
        return distance_point_line(a, c, d);
    }
    if c == d {
        return distance_point_line(d, a, b);
    }

    let endpoints_distance = || {
        distance_point_line(a, c, d)
            .min(distance_point_line(b, c, d))
            .min(distance_point_line(c, a, b))
            .min(distance_point_line(d, a, b))
    };

    if !Envelope::segments_intersect(a, b, c, d) {
        return endpoints_distance();
    }

    let r_top = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let bottom = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    let s_top = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);

    if bottom == 0.0 {
        return endpoints_distance();
    }

    let r = r_top / bottom;
    let s = s_top / bottom;
    if !(0.0..=1.0).contains(&r) || !(0.0..=1.0).contains(&s) {
        return endpoints_distance();
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn coords(v: &[(f64, f64)]) -> Vec<Coord> {
        v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    fn square() -> Vec<Coord> {
        coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)])
    }

    #[test]
    fn point_in_square() {
        let ring = square();
        assert!(is_point_in_ring(&Coord::new(5.0, 5.0), &ring));
        assert!(!is_point_in_ring(&Coord::new(15.0, 5.0), &ring));
        assert!(!is_point_in_ring(&Coord::new(-5.0, 5.0), &ring));
        assert!(!is_point_in_ring(&Coord::new(5.0, 15.0), &ring));
        assert!(is_point_in_ring(&Coord::new(0.1, 9.9), &ring));
    }

    #[test]
    #[should_panic(expected = "invalid ring")]
    fn open_ring_is_rejected() {
        let ring = coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        is_point_in_ring(&Coord::new(-5.0, 5.0), &ring);
    }

    #[test]
    fn empty_ring_contains_nothing() {
        assert!(!is_point_in_ring(&Coord::new(0.0, 0.0), &[]));
    }

    #[test]
    fn point_in_concave_ring() {
        // U shape open to the top
        let ring = coords(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
        ]);
        assert!(is_point_in_ring(&Coord::new(0.5, 2.0), &ring));
        assert!(is_point_in_ring(&Coord::new(2.5, 2.0), &ring));
        assert!(!is_point_in_ring(&Coord::new(1.5, 2.0), &ring));
        assert!(is_point_in_ring(&Coord::new(1.5, 0.5), &ring));
        // ray passes through vertices (2, 1) and (1, 1)
        assert!(is_point_in_ring(&Coord::new(0.5, 1.0), &ring));
    }

    #[test]
    fn point_in_ring_with_repeated_points() {
        let ring = coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        assert!(is_point_in_ring(&Coord::new(5.0, 5.0), &ring));
        assert!(!is_point_in_ring(&Coord::new(11.0, 5.0), &ring));
    }

    #[test]
    fn area() {
        assert_eq!(signed_area(&square()), 100.0);
        let mut reversed = square();
        reversed.reverse();
        assert_eq!(signed_area(&reversed), -100.0);
        assert_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn ccw() {
        assert_eq!(is_ccw(&square()), Ok(true));
        let mut reversed = square();
        reversed.reverse();
        assert_eq!(is_ccw(&reversed), Ok(false));

        // highest point is repeated
        let ring = coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 10.0),
            (5.0, 10.0),
            (0.0, 0.0),
        ]);
        assert_eq!(is_ccw(&ring), Ok(true));

        // flat top edge
        let ring = coords(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0), (0.0, 0.0)]);
        assert_eq!(is_ccw(&ring), Ok(false));

        assert_matches!(
            is_ccw(&coords(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])),
            Err(TopologyError::TooFewPoints { .. })
        );
    }

    #[test]
    fn on_line() {
        let line = coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert!(is_on_line(&Coord::new(5.0, 0.0), &line));
        assert!(is_on_line(&Coord::new(10.0, 0.0), &line));
        assert!(is_on_line(&Coord::new(10.0, 3.0), &line));
        assert!(!is_on_line(&Coord::new(5.0, 0.1), &line));
        assert!(!is_on_line(&Coord::new(11.0, 0.0), &line));
    }

    #[test]
    fn line_length() {
        assert_eq!(length(&square()), 40.0);
        assert_eq!(length(&coords(&[(0.0, 0.0), (3.0, 4.0)])), 5.0);
        assert_eq!(length(&[]), 0.0);
    }

    #[test]
    fn point_line_distance() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(10.0, 0.0);
        assert_eq!(distance_point_line(&Coord::new(5.0, 5.0), &a, &b), 5.0);
        assert_eq!(distance_point_line(&Coord::new(-3.0, 4.0), &a, &b), 5.0);
        assert_eq!(distance_point_line(&Coord::new(13.0, -4.0), &a, &b), 5.0);
        assert_eq!(distance_point_line(&Coord::new(3.0, 4.0), &a, &a), 5.0);
        assert_eq!(
            distance_point_line_perpendicular(&Coord::new(-3.0, 4.0), &a, &b),
            4.0
        );
        assert_eq!(
            distance_point_line_perpendicular(&Coord::new(3.0, 4.0), &a, &a),
            5.0
        );
    }

    #[test]
    fn line_line_distance() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(10.0, 10.0);
        assert_eq!(
            distance_line_line(&a, &b, &Coord::new(0.0, 10.0), &Coord::new(10.0, 0.0)),
            0.0
        );
        assert_abs_diff_eq!(
            distance_line_line(&a, &b, &Coord::new(1.0, 0.0), &Coord::new(11.0, 10.0)),
            0.5f64.sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(
            distance_line_line(&a, &b, &Coord::new(13.0, 14.0), &Coord::new(13.0, 14.0)),
            5.0
        );
        assert_eq!(
            distance_line_line(&a, &a, &Coord::new(3.0, -4.0), &Coord::new(3.0, 4.0)),
            3.0
        );
    }
}
