//! Point-in-ring testers.

use crate::algorithm::cg::{assert_valid_ring, is_point_in_ring, is_ray_crossing};
use crate::cartesian::Coord;
use crate::contour::{validate_ring, LinearRing};
use crate::error::TopologyError;
use crate::index::{build_chains, Bintree, Interval, MonotoneChain};

/// Tests whether points lie inside a fixed ring.
///
/// Results for points lying exactly on the ring boundary are not specified.
pub trait PointInRing {
    /// Returns true if the point is inside the ring.
    fn is_inside(&self, p: &Coord) -> bool;
}

/// Point-in-ring test that checks every segment of the ring. Good for small rings or single queries.
#[derive(Debug, Copy, Clone)]
pub struct SimplePointInRing<'a> {
    ring: &'a [Coord],
}

impl<'a> SimplePointInRing<'a> {
    /// Creates a new tester for the closed sequence of coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the ring is not closed or has fewer than 4 coordinates.
    pub fn new(ring: &'a [Coord]) -> Self {
        assert_valid_ring(ring);
        Self { ring }
    }
}

impl PointInRing for SimplePointInRing<'_> {
    fn is_inside(&self, p: &Coord) -> bool {
        is_point_in_ring(p, self.ring)
    }
}

/// Indexed point-in-ring test for large rings queried many times.
///
/// On construction the ring is split into monotone chains that are stored in an interval tree by their `y` range. A
/// query then only checks the segments of the chains that span the `y` of the point, which makes a query cost
/// logarithmic in the ring size plus the number of candidate segments.
#[derive(Debug)]
pub struct McPointInRing {
    coords: Vec<Coord>,
    chains: Vec<MonotoneChain>,
    tree: Bintree<usize>,
}

impl McPointInRing {
    /// Builds the index for the closed sequence of coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the ring is not closed or has fewer than 4 coordinates. Use [`McPointInRing::try_new`] to get an
    /// error instead.
    pub fn new(ring: &[Coord]) -> Self {
        assert_valid_ring(ring);
        Self::build(ring)
    }

    /// Builds the index for the closed sequence of coordinates, failing if it is not a valid ring.
    pub fn try_new(ring: &[Coord]) -> Result<Self, TopologyError> {
        validate_ring(ring)?;
        Ok(Self::build(ring))
    }

    /// Builds the index for the ring.
    pub fn from_ring(ring: &LinearRing) -> Self {
        Self::build(ring.points())
    }

    /// Monotone chains of the ring.
    pub fn chains(&self) -> &[MonotoneChain] {
        &self.chains
    }

    fn build(ring: &[Coord]) -> Self {
        let mut coords = ring.to_vec();
        coords.dedup();

        let chains = build_chains(&coords);
        let mut tree = Bintree::new();
        for (index, chain) in chains.iter().enumerate() {
            tree.insert(chain.y_interval(), index);
        }

        log::trace!(
            "Built point-in-ring index with {} chains for {} coordinates",
            chains.len(),
            coords.len()
        );

        Self {
            coords,
            chains,
            tree,
        }
    }
}

impl PointInRing for McPointInRing {
    fn is_inside(&self, p: &Coord) -> bool {
        let search = Interval::point(p.y);
        let mut crossings = 0usize;

        for &chain_index in self.tree.query(&search) {
            self.chains[chain_index].select(&self.coords, &search, &mut |p1, p2| {
                if is_ray_crossing(p, p1, p2) {
                    crossings += 1;
                }
            });
        }

        crossings % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn coords(v: &[(f64, f64)]) -> Vec<Coord> {
        v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    /// Star-shaped ring with many vertices alternating between two radii.
    fn star(n: usize) -> Vec<Coord> {
        let mut ring: Vec<Coord> = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                let r = if i % 2 == 0 { 10.0 } else { 4.0 };
                Coord::new(r * angle.cos(), r * angle.sin())
            })
            .collect();
        ring.push(ring[0]);
        ring
    }

    #[test]
    fn square() {
        let ring = coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let index = McPointInRing::new(&ring);
        assert!(index.is_inside(&Coord::new(5.0, 5.0)));
        assert!(!index.is_inside(&Coord::new(15.0, 5.0)));
        assert!(!index.is_inside(&Coord::new(5.0, 15.0)));
        assert!(!index.is_inside(&Coord::new(5.0, -15.0)));
    }

    #[test]
    fn repeated_points_are_removed() {
        let ring = coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        let index = McPointInRing::new(&ring);
        assert_eq!(index.coords.len(), 5);
        assert!(index.is_inside(&Coord::new(5.0, 5.0)));
    }

    #[test]
    fn agrees_with_simple_tester() {
        let ring = star(64);
        let simple = SimplePointInRing::new(&ring);
        let indexed = McPointInRing::new(&ring);
        assert!(indexed.chains().len() > 2);

        for i in 0..41 {
            for j in 0..41 {
                let p = Coord::new(i as f64 * 0.5 - 10.0, j as f64 * 0.5 - 10.0);
                assert_eq!(simple.is_inside(&p), indexed.is_inside(&p), "{p:?}");
            }
        }

        assert!(indexed.is_inside(&Coord::new(0.0, 0.0)));
        assert!(!indexed.is_inside(&Coord::new(9.0, 9.0)));
    }

    #[test]
    fn from_ring() {
        let ring = LinearRing::new(coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (2.0, 4.0),
            (0.0, 0.0),
        ]))
        .unwrap();
        let index = McPointInRing::from_ring(&ring);
        assert!(index.is_inside(&Coord::new(2.0, 1.0)));
        assert!(!index.is_inside(&Coord::new(0.5, 3.0)));
    }

    fn open_square() -> Vec<Coord> {
        coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn try_new_rejects_invalid_rings() {
        assert_matches!(
            McPointInRing::try_new(&open_square()),
            Err(TopologyError::RingNotClosed)
        );
        assert_matches!(
            McPointInRing::try_new(&coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])),
            Err(TopologyError::TooFewPoints { .. })
        );

        let mut closed = open_square();
        closed.push(closed[0]);
        let index = McPointInRing::try_new(&closed).unwrap();
        assert!(!index.is_inside(&Coord::new(-5.0, 5.0)));
    }

    #[test]
    #[should_panic(expected = "invalid ring")]
    fn indexed_tester_panics_on_open_ring() {
        McPointInRing::new(&open_square());
    }

    #[test]
    #[should_panic(expected = "invalid ring")]
    fn simple_tester_panics_on_open_ring() {
        SimplePointInRing::new(&open_square());
    }
}
