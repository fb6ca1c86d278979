//! One-dimensional interval index.
//!
//! The tree divides the number line into nested power-of-two sized intervals. The root has two subtrees: one for the
//! negative and one for the positive half of the line. An item is stored in the smallest node whose interval contains
//! the item interval, so a query only visits nodes overlapping the search interval.

use crate::index::Interval;

/// Value dividing the two subtrees of the root.
const ORIGIN: f64 = 0.0;

/// Binary interval tree.
#[derive(Debug)]
pub struct Bintree<T> {
    root_items: Vec<(Interval, T)>,
    root_subnodes: [Option<Box<Node<T>>>; 2],
    min_extent: f64,
    len: usize,
}

impl<T> Default for Bintree<T> {
    fn default() -> Self {
        Self {
            root_items: vec![],
            root_subnodes: [None, None],
            min_extent: 1.0,
            len: 0,
        }
    }
}

impl<T> Bintree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of levels below the root.
    pub fn depth(&self) -> usize {
        self.root_subnodes
            .iter()
            .flatten()
            .map(|node| node.depth())
            .max()
            .unwrap_or(0)
    }

    /// Adds an item covering the given interval.
    pub fn insert(&mut self, interval: Interval, item: T) {
        self.collect_stats(&interval);
        let placement = ensure_extent(&interval, self.min_extent);
        self.len += 1;

        let Some(index) = subnode_index(&placement, ORIGIN) else {
            self.root_items.push((interval, item));
            return;
        };

        let subnode = &mut self.root_subnodes[index];
        let needs_expansion = match subnode {
            Some(node) => !node.interval.contains(&placement),
            None => true,
        };
        if needs_expansion {
            let expanded = Node::create_expanded(subnode.take(), &placement);
            *subnode = Some(expanded);
        }

        match subnode {
            Some(node) => node.get_node(&placement).items.push((interval, item)),
            None => self.root_items.push((interval, item)),
        }
    }

    /// Returns all items whose intervals overlap the search interval.
    pub fn query(&self, search: &Interval) -> Vec<&T> {
        let mut result = vec![];
        collect_overlapping(&self.root_items, search, &mut result);
        for node in self.root_subnodes.iter().flatten() {
            node.add_overlapping(search, &mut result);
        }

        result
    }

    fn collect_stats(&mut self, interval: &Interval) {
        let width = interval.width();
        if width < self.min_extent && width > 0.0 {
            self.min_extent = width;
        }
    }
}

#[derive(Debug)]
struct Node<T> {
    interval: Interval,
    level: i32,
    items: Vec<(Interval, T)>,
    subnodes: [Option<Box<Node<T>>>; 2],
}

impl<T> Node<T> {
    fn new(interval: Interval, level: i32) -> Self {
        Self {
            interval,
            level,
            items: vec![],
            subnodes: [None, None],
        }
    }

    /// Creates the node with the smallest aligned interval containing `interval`.
    fn create(interval: &Interval) -> Self {
        let (key, level) = compute_key(interval);
        Self::new(key, level)
    }

    /// Creates a node containing both `node` and `interval`, with `node` as its descendant.
    fn create_expanded(node: Option<Box<Node<T>>>, interval: &Interval) -> Box<Node<T>> {
        let mut expanded = *interval;
        if let Some(node) = &node {
            expanded.expand_to_include(&node.interval);
        }

        let mut larger = Box::new(Self::create(&expanded));
        if let Some(node) = node {
            larger.insert_node(node);
        }

        larger
    }

    fn centre(&self) -> f64 {
        self.interval.centre()
    }

    fn subnode_interval(&self, index: usize) -> Interval {
        if index == 0 {
            Interval::new(self.interval.min(), self.centre())
        } else {
            Interval::new(self.centre(), self.interval.max())
        }
    }

    fn insert_node(&mut self, mut node: Box<Node<T>>) {
        let Some(index) = subnode_index(&node.interval, self.centre()) else {
            // Aligned intervals never span the centre of a larger aligned interval, but keep the items reachable anyway.
            node.drain_into(&mut self.items);
            return;
        };

        if node.level == self.level - 1 {
            self.subnodes[index] = Some(node);
        } else {
            let mut child = Box::new(Node::new(self.subnode_interval(index), self.level - 1));
            child.insert_node(node);
            self.subnodes[index] = Some(child);
        }
    }

    /// Returns the smallest node containing the search interval, creating missing nodes on the way.
    fn get_node(&mut self, search: &Interval) -> &mut Node<T> {
        if let Some(index) = subnode_index(search, self.centre()) {
            let interval = self.subnode_interval(index);
            let level = self.level - 1;
            return self.subnodes[index]
                .get_or_insert_with(|| Box::new(Node::new(interval, level)))
                .get_node(search);
        }

        self
    }

    fn add_overlapping<'a>(&'a self, search: &Interval, result: &mut Vec<&'a T>) {
        if !self.interval.overlaps(search) {
            return;
        }

        collect_overlapping(&self.items, search, result);
        for node in self.subnodes.iter().flatten() {
            node.add_overlapping(search, result);
        }
    }

    fn drain_into(&mut self, items: &mut Vec<(Interval, T)>) {
        items.append(&mut self.items);
        for node in self.subnodes.iter_mut().flatten() {
            node.drain_into(items);
        }
    }

    fn depth(&self) -> usize {
        1 + self
            .subnodes
            .iter()
            .flatten()
            .map(|node| node.depth())
            .max()
            .unwrap_or(0)
    }
}

fn collect_overlapping<'a, T>(items: &'a [(Interval, T)], search: &Interval, result: &mut Vec<&'a T>) {
    result.extend(
        items
            .iter()
            .filter(|(interval, _)| interval.overlaps(search))
            .map(|(_, item)| item),
    );
}

/// Index of the half of a node the interval fits into, or `None` if the interval spans the centre.
fn subnode_index(interval: &Interval, centre: f64) -> Option<usize> {
    if interval.max() <= centre {
        Some(0)
    } else if interval.min() >= centre {
        Some(1)
    } else {
        None
    }
}

/// Smallest power-of-two sized interval aligned to its size that contains `interval`, with its level (log2 of size).
fn compute_key(interval: &Interval) -> (Interval, i32) {
    let mut level = exponent(interval.width()) + 1;
    let mut key = aligned_interval(level, interval);
    while !key.contains(interval) {
        level += 1;
        key = aligned_interval(level, interval);
    }

    (key, level)
}

fn aligned_interval(level: i32, interval: &Interval) -> Interval {
    let size = 2f64.powi(level);
    let min = (interval.min() / size).floor() * size;
    Interval::new(min, min + size)
}

/// Binary exponent of a finite positive value.
fn exponent(value: f64) -> i32 {
    ((value.to_bits() >> 52) & 0x7ff) as i32 - 1023
}

/// Zero-width intervals are widened, so that every item gets a node of finite depth.
fn ensure_extent(interval: &Interval, min_extent: f64) -> Interval {
    if interval.width() > 0.0 {
        return *interval;
    }

    Interval::new(
        interval.min() - min_extent / 2.0,
        interval.max() + min_extent / 2.0,
    )
}
