//! Monotone chains of coordinate sequences.
//!
//! A chain is a maximal run of segments along which the `y` coordinate never changes direction: it only grows or only
//! decreases (horizontal segments are allowed anywhere). The `y` range of any part of a chain is given by the `y` of
//! its two ends, which lets segments of a chain be searched by binary subdivision.

use serde::{Deserialize, Serialize};

use crate::cartesian::Coord;
use crate::index::Interval;
use crate::segment::LineSegment;

/// Monotone section of a coordinate sequence, given by the indices of its first and last coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonotoneChain {
    start: usize,
    end: usize,
    y_interval: Interval,
}

impl MonotoneChain {
    /// Index of the first coordinate of the chain.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the last coordinate of the chain.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Range of `y` values covered by the chain.
    pub fn y_interval(&self) -> Interval {
        self.y_interval
    }

    /// Number of segments in the chain.
    pub fn segment_count(&self) -> usize {
        self.end - self.start
    }

    /// Iterates over segments of the chain. `coords` must be the sequence the chain was built from.
    pub fn segments<'a>(&self, coords: &'a [Coord]) -> impl Iterator<Item = LineSegment> + 'a {
        coords[self.start..=self.end]
            .windows(2)
            .map(|w| LineSegment::new(w[0], w[1]))
    }

    /// Calls `visitor` for every segment of the chain whose `y` range overlaps the `search` interval.
    ///
    /// `coords` must be the sequence the chain was built from.
    pub fn select(
        &self,
        coords: &[Coord],
        search: &Interval,
        visitor: &mut impl FnMut(&Coord, &Coord),
    ) {
        select_in_range(coords, search, self.start, self.end, visitor);
    }
}

fn select_in_range(
    coords: &[Coord],
    search: &Interval,
    start: usize,
    end: usize,
    visitor: &mut impl FnMut(&Coord, &Coord),
) {
    if !Interval::new(coords[start].y, coords[end].y).overlaps(search) {
        return;
    }

    if end - start == 1 {
        visitor(&coords[start], &coords[end]);
        return;
    }

    let mid = (start + end) / 2;
    select_in_range(coords, search, start, mid, visitor);
    select_in_range(coords, search, mid, end, visitor);
}

/// Splits the sequence into monotone chains. Every segment of the sequence belongs to exactly one chain.
pub fn build_chains(coords: &[Coord]) -> Vec<MonotoneChain> {
    let mut chains = vec![];
    let mut start = 0;

    while start + 1 < coords.len() {
        let end = find_chain_end(coords, start);
        chains.push(MonotoneChain {
            start,
            end,
            y_interval: Interval::new(coords[start].y, coords[end].y),
        });
        start = end;
    }

    chains
}

fn find_chain_end(coords: &[Coord], start: usize) -> usize {
    let mut direction = 0;
    let mut end = start;

    while end + 1 < coords.len() {
        let next_direction = y_direction(&coords[end], &coords[end + 1]);
        if direction == 0 {
            direction = next_direction;
        } else if next_direction != 0 && next_direction != direction {
            break;
        }

        end += 1;
    }

    end
}

fn y_direction(from: &Coord, to: &Coord) -> i32 {
    if to.y > from.y {
        1
    } else if to.y < from.y {
        -1
    } else {
        0
    }
}
