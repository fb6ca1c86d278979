//! Convex hull of a set of points.

use std::cmp::Ordering;

use crate::algorithm::cg::is_point_in_ring;
use crate::cartesian::{robust_orientation_index, unique_coordinates, Coord};
use crate::contour::{LineString, LinearRing};
use crate::geometry::{GeometryCollection, Geom};
use crate::polygon::Polygon;

/// Number of distinct input points above which the octagon reduction is applied before the scan.
pub const DEFAULT_REDUCTION_THRESHOLD: usize = 50;

/// Computes the convex hull of a set of points using the Graham scan.
///
/// The resulting geometry depends on the number of distinct input points:
///
/// * no points - empty collection
/// * one point - [`Geom::Point`]
/// * two points, or all points collinear - [`Geom::LineString`] with the two extreme points, lowest first
/// * otherwise - [`Geom::Polygon`] with a counter-clockwise shell starting at the lowest point
///
/// The hull shell never has three consecutive collinear vertices. All turns are decided by the exact orientation
/// predicate, so nearly collinear inputs give a consistent result.
///
/// ```
/// use geotopo::algorithm::ConvexHull;
/// use geotopo::{Coord, Geom};
///
/// let points = [(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (4.0, 4.0), (0.0, 4.0)].map(Coord::from);
/// let Geom::Polygon(hull) = ConvexHull::new(&points).convex_hull() else {
///     panic!("expected polygon");
/// };
/// assert_eq!(hull.shell().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Coord>,
    reduction_threshold: usize,
}

impl ConvexHull {
    /// Creates a hull builder for the given points. Duplicate points are allowed.
    pub fn new<'a>(points: impl IntoIterator<Item = &'a Coord>) -> Self {
        Self {
            points: unique_coordinates(points),
            reduction_threshold: DEFAULT_REDUCTION_THRESHOLD,
        }
    }

    /// Creates a hull builder for all coordinates of the geometry.
    pub fn from_geometry(geom: &Geom) -> Self {
        Self::new(&geom.coordinates())
    }

    /// Sets the number of distinct points above which the point set is first reduced by discarding the points
    /// inside the octagon of extreme points. The reduction does not change the result, it only speeds up the scan
    /// for large inputs.
    pub fn with_reduction_threshold(mut self, threshold: usize) -> Self {
        self.reduction_threshold = threshold;
        self
    }

    /// Computes the hull.
    pub fn convex_hull(&self) -> Geom {
        match self.points.len() {
            0 => return Geom::Collection(GeometryCollection::empty()),
            1 => return Geom::Point(self.points[0]),
            2 => {
                let mut points = self.points.clone();
                pre_sort(&mut points);
                return Geom::LineString(LineString::new(points));
            }
            _ => {}
        }

        let mut points = if self.points.len() > self.reduction_threshold {
            reduce(&self.points)
        } else {
            self.points.clone()
        };

        pre_sort(&mut points);
        let hull = graham_scan(&points);

        line_or_polygon(hull)
    }
}

/// Extreme points of the set in 8 directions: min x, min x-y, max y, max x+y, max x, max x-y, min y, min x+y.
fn octagon_points(points: &[Coord]) -> [Coord; 8] {
    let mut oct = [points[0]; 8];
    for p in points {
        if p.x < oct[0].x {
            oct[0] = *p;
        }
        if p.x - p.y < oct[1].x - oct[1].y {
            oct[1] = *p;
        }
        if p.y > oct[2].y {
            oct[2] = *p;
        }
        if p.x + p.y > oct[3].x + oct[3].y {
            oct[3] = *p;
        }
        if p.x > oct[4].x {
            oct[4] = *p;
        }
        if p.x - p.y > oct[5].x - oct[5].y {
            oct[5] = *p;
        }
        if p.y < oct[6].y {
            oct[6] = *p;
        }
        if p.x + p.y < oct[7].x + oct[7].y {
            oct[7] = *p;
        }
    }

    oct
}

/// Closed ring through the extreme points, or `None` if it has fewer than 3 distinct vertices.
fn octagon_ring(points: &[Coord]) -> Option<Vec<Coord>> {
    let oct = octagon_points(points);
    if unique_coordinates(&oct).len() < 3 {
        return None;
    }

    let mut ring: Vec<Coord> = Vec::with_capacity(oct.len() + 1);
    for p in oct {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }

    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    Some(ring)
}

/// Discards the points strictly inside the octagon of extreme points. They cannot be hull vertices.
///
/// If the octagon is degenerate, the points are returned unchanged.
fn reduce(points: &[Coord]) -> Vec<Coord> {
    let Some(ring) = octagon_ring(points) else {
        return points.to_vec();
    };

    let candidates = ring.iter().chain(
        points
            .iter()
            .filter(|p| !(is_point_in_ring(p, &ring) && is_strictly_inside(p, &ring))),
    );
    let reduced = unique_coordinates(candidates);

    log::trace!(
        "Octagon reduction kept {} of {} points",
        reduced.len(),
        points.len()
    );

    if reduced.len() < 3 {
        return points.to_vec();
    }

    reduced
}

/// Returns true if the point is strictly on the same side of every edge of the ring.
///
/// Such a point is inside the convex hull of the ring vertices and off its boundary. The ray crossing test alone can
/// misplace points lying within rounding distance of an edge.
fn is_strictly_inside(p: &Coord, ring: &[Coord]) -> bool {
    let mut side = 0;
    for w in ring.windows(2) {
        let orientation = robust_orientation_index(&w[0], &w[1], p);
        if orientation == 0 || (side != 0 && orientation != side) {
            return false;
        }
        side = orientation;
    }

    side != 0
}

/// Moves the lowest point (leftmost among the lowest) to the start and sorts the rest counter-clockwise around it.
fn pre_sort(points: &mut [Coord]) {
    let mut pivot_index = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let pivot = &points[pivot_index];
        if p.y < pivot.y || (p.y == pivot.y && p.x < pivot.x) {
            pivot_index = i;
        }
    }
    points.swap(0, pivot_index);

    let (pivot, rest) = points.split_at_mut(1);
    let origin = pivot[0];
    rest.sort_by(|p, q| polar_compare(&origin, p, q));
}

/// Compares the directions from `origin` to `p` and `q` without computing angles. Points in the same direction are
/// ordered by distance, nearest first.
///
/// `origin` must be the lowest and leftmost of the points, so all directions are in `[0, pi)` and the exact
/// orientation orders them transitively.
fn polar_compare(origin: &Coord, p: &Coord, q: &Coord) -> Ordering {
    match robust_orientation_index(origin, p, q) {
        1 => Ordering::Less,
        -1 => Ordering::Greater,
        _ => distance_compare(origin, p, q),
    }
}

/// Compares the distances from `origin` to `p` and `q` lying on the same ray from it. Only input coordinates are
/// compared, so no rounding is involved.
fn distance_compare(origin: &Coord, p: &Coord, q: &Coord) -> Ordering {
    let ordering = if p.x != origin.x {
        p.x.partial_cmp(&q.x)
    } else {
        p.y.partial_cmp(&q.y)
    }
    .unwrap_or(Ordering::Equal);

    if p.x < origin.x {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Scans presorted points returning the closed hull ring. Needs at least 3 points.
fn graham_scan(sorted: &[Coord]) -> Vec<Coord> {
    let mut stack: Vec<Coord> = sorted[..3].to_vec();

    for p in &sorted[3..] {
        while stack.len() >= 2
            && robust_orientation_index(&stack[stack.len() - 2], &stack[stack.len() - 1], p) <= 0
        {
            stack.pop();
        }
        stack.push(*p);
    }

    stack.push(sorted[0]);
    stack
}

/// Returns true if `c2` is collinear with `c1` and `c3` and lies between them.
fn is_between(c1: &Coord, c2: &Coord, c3: &Coord) -> bool {
    if robust_orientation_index(c1, c2, c3) != 0 {
        return false;
    }

    if c1.x != c3.x && ((c1.x <= c2.x && c2.x <= c3.x) || (c3.x <= c2.x && c2.x <= c1.x)) {
        return true;
    }

    if c1.y != c3.y && ((c1.y <= c2.y && c2.y <= c3.y) || (c3.y <= c2.y && c2.y <= c1.y)) {
        return true;
    }

    false
}

/// Removes repeated vertices and vertices lying on the segment between their neighbours.
fn clean_ring(ring: &[Coord]) -> Vec<Coord> {
    let mut cleaned: Vec<Coord> = Vec::with_capacity(ring.len());
    let mut previous: Option<Coord> = None;

    for w in ring.windows(2) {
        let (current, next) = (&w[0], &w[1]);
        if current == next {
            continue;
        }

        if let Some(previous) = &previous {
            if is_between(previous, current, next) {
                continue;
            }
        }

        cleaned.push(*current);
        previous = Some(*current);
    }

    if let Some(last) = ring.last() {
        cleaned.push(*last);
    }

    cleaned
}

fn line_or_polygon(hull: Vec<Coord>) -> Geom {
    let cleaned = clean_ring(&hull);
    if cleaned.len() == 3 {
        return Geom::LineString(LineString::new(cleaned[..2].to_vec()));
    }

    Geom::Polygon(Polygon::new(LinearRing::new_unchecked(cleaned), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn coords(v: &[(f64, f64)]) -> Vec<Coord> {
        v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    fn hull_shell(points: &[Coord]) -> Vec<Coord> {
        match ConvexHull::new(points).convex_hull() {
            Geom::Polygon(polygon) => polygon.shell().to_vec(),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn square_with_interior_point() {
        let points = coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
        assert_eq!(
            hull_shell(&points),
            coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn degenerate_inputs() {
        assert_matches!(ConvexHull::new(&Vec::<Coord>::new()).convex_hull(), Geom::Collection(c) if c.is_empty());

        let p = Coord::new(1.0, 2.0);
        assert_eq!(ConvexHull::new(&[p, p, p]).convex_hull(), Geom::Point(p));

        let points = coords(&[(1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_matches!(
            ConvexHull::new(&points).convex_hull(),
            Geom::LineString(line) if line.points() == coords(&[(0.0, 0.0), (1.0, 1.0)])
        );
    }

    #[test]
    fn collinear_points_give_line() {
        let points = coords(&[(2.0, 2.0), (0.0, 0.0), (3.0, 3.0), (1.0, 1.0)]);
        assert_matches!(
            ConvexHull::new(&points).convex_hull(),
            Geom::LineString(line) if line.points() == coords(&[(0.0, 0.0), (3.0, 3.0)])
        );
    }

    #[test]
    fn collinear_boundary_points_are_removed() {
        let points = coords(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (4.0, 4.0),
            (2.0, 4.0),
            (0.0, 4.0),
            (0.0, 1.0),
            (0.0, 3.0),
        ]);
        assert_eq!(
            hull_shell(&points),
            coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn pivot_is_lowest_then_leftmost() {
        let points = coords(&[(5.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 2.0)]);
        assert_eq!(
            hull_shell(&points),
            coords(&[(1.0, 0.0), (3.0, 0.0), (5.0, 1.0), (0.0, 2.0), (1.0, 0.0)])
        );
    }

    #[test]
    fn reduction_does_not_change_result() {
        let mut points = vec![];
        for i in 0..20 {
            for j in 0..20 {
                points.push(Coord::new(i as f64, j as f64));
            }
        }

        let expected = coords(&[(0.0, 0.0), (19.0, 0.0), (19.0, 19.0), (0.0, 19.0), (0.0, 0.0)]);
        assert_eq!(hull_shell(&points), expected);

        let unreduced = ConvexHull::new(&points)
            .with_reduction_threshold(usize::MAX)
            .convex_hull();
        assert_matches!(unreduced, Geom::Polygon(p) if p.shell().points() == expected);
    }

    #[test]
    fn reduction_of_circle() {
        let points: Vec<Coord> = (0..100)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / 100.0;
                Coord::new(angle.cos() * 10.0, angle.sin() * 10.0)
            })
            .chain((0..100).map(|i| Coord::new((i % 10) as f64 - 4.5, (i / 10) as f64 - 4.5)))
            .collect();

        let reduced = hull_shell(&points);
        let full = match ConvexHull::new(&points)
            .with_reduction_threshold(usize::MAX)
            .convex_hull()
        {
            Geom::Polygon(p) => p.shell().to_vec(),
            other => panic!("expected polygon, got {other:?}"),
        };

        assert_eq!(reduced, full);
        assert!(reduced.len() > 50);
    }

    #[test]
    fn reduction_skips_degenerate_octagon() {
        let points: Vec<Coord> = (0..60).map(|i| Coord::new(i as f64, 0.0)).collect();
        assert!(octagon_ring(&points).is_none());
        assert_eq!(reduce(&points), points);
        assert_matches!(
            ConvexHull::new(&points).convex_hull(),
            Geom::LineString(line) if line.points() == coords(&[(0.0, 0.0), (59.0, 0.0)])
        );
    }

    /// Points close to the line `y = 0.1 x` with offsets of a few units in the last place.
    fn near_collinear(n: usize) -> Vec<Coord> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                let k = ((i * 37) % 7) as f64 - 3.0;
                Coord::new(t, 0.1 * t + 1e-13 * k)
            })
            .collect()
    }

    #[test]
    fn radial_order_is_consistent_for_nearly_collinear_points() {
        let mut points = near_collinear(66);
        pre_sort(&mut points);

        let origin = points[0];
        for i in 1..points.len() {
            for j in i + 1..points.len() {
                assert_ne!(
                    polar_compare(&origin, &points[i], &points[j]),
                    Ordering::Greater,
                    "{:?} {:?}",
                    points[i],
                    points[j]
                );
            }
        }
    }

    #[test]
    fn nearly_collinear_points() {
        for n in [3, 10, 66, 200] {
            let points = near_collinear(n);
            let full = ConvexHull::new(&points)
                .with_reduction_threshold(usize::MAX)
                .convex_hull();
            let reduced = ConvexHull::new(&points)
                .with_reduction_threshold(0)
                .convex_hull();
            assert_eq!(full, reduced, "n = {n}");

            for vertex in full.coordinates() {
                assert!(points.contains(&vertex));
            }

            if let Geom::Polygon(polygon) = &full {
                for w in polygon.shell().windows(2) {
                    for p in &points {
                        assert!(robust_orientation_index(&w[0], &w[1], p) >= 0, "{p:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn strictly_inside_octagon() {
        let ring = coords(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
        assert!(is_strictly_inside(&Coord::new(2.0, 2.0), &ring));
        assert!(!is_strictly_inside(&Coord::new(0.0, 2.0), &ring));
        assert!(!is_strictly_inside(&Coord::new(5.0, 2.0), &ring));

        let reversed: Vec<Coord> = ring.iter().rev().copied().collect();
        assert!(is_strictly_inside(&Coord::new(2.0, 2.0), &reversed));
    }

    #[test]
    fn distance_order_on_a_ray() {
        let origin = Coord::new(1.0, 0.0);
        let near = Coord::new(0.0, 1.0);
        let far = Coord::new(-1.0, 2.0);
        assert_eq!(distance_compare(&origin, &near, &far), Ordering::Less);
        assert_eq!(distance_compare(&origin, &far, &near), Ordering::Greater);

        let up = Coord::new(1.0, 3.0);
        assert_eq!(distance_compare(&origin, &up, &Coord::new(1.0, 1.0)), Ordering::Greater);
    }

    #[test]
    fn is_between_checks_range() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(1.0, 1.0);
        let c = Coord::new(2.0, 2.0);
        assert!(is_between(&a, &b, &c));
        assert!(!is_between(&a, &c, &b));
        assert!(!is_between(&a, &Coord::new(1.0, 0.0), &c));

        let vertical = Coord::new(0.0, 2.0);
        assert!(is_between(&a, &Coord::new(0.0, 1.0), &vertical));
    }
}
