// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: nodes, insertion, subdivision, queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use smallvec::SmallVec;

use crate::types::Region;

/// Depth at which a node stops subdividing and lets its bucket grow past
/// capacity instead.
///
/// Without a floor, more than `capacity` coincident points (or points packed
/// onto one split line) would subdivide forever: halving a region never
/// separates points that share a coordinate. Thirty-two halvings shrink any
/// practical world extent below `f64` resolution, so the cap is invisible
/// for real point sets.
pub const MAX_DEPTH: u16 = 32;

/// A point-region quadtree over a fixed world [`Region`].
///
/// Each node holds a bucket of up to `capacity` points. Inserting into a
/// full leaf splits it into four equal quadrants and delegates the new point
/// downward, while the points already in the bucket stay where they are (see
/// the [crate docs][crate#frozen-buckets] for the full policy). Payloads of
/// type `P` travel with their point through insertion and queries.
///
/// There is no removal: to reflect moved points, rebuild the tree with
/// [`QuadTree::reset`] each tick.
///
/// ## Example
///
/// ```rust
/// use canopy_quadtree::{Point, QuadTree, Region};
///
/// let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0), 4);
/// assert!(tree.insert(Point::new(10.0, 10.0), "a"));
/// assert!(!tree.insert(Point::new(-5.0, 10.0), "out of bounds"));
///
/// let hits = tree.query_region(Region::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(hits, vec![(Point::new(10.0, 10.0), "a")]);
/// ```
pub struct QuadTree<P: Copy + Debug> {
    root: Node<P>,
    capacity: usize,
    len: usize,
}

/// The four quadrants of a subdivided node. Always all present; a node is
/// either a leaf or has exactly four children.
struct Quadrants<P> {
    ne: Node<P>,
    se: Node<P>,
    sw: Node<P>,
    nw: Node<P>,
}

struct Node<P> {
    region: Region,
    depth: u16,
    bucket: SmallVec<[(Point, P); 4]>,
    children: Option<Box<Quadrants<P>>>,
}

impl<P: Copy + Debug> QuadTree<P> {
    /// Create an empty tree over `bounds`, splitting nodes once their bucket
    /// would exceed `capacity` points.
    pub fn new(bounds: Region, capacity: usize) -> Self {
        Self {
            root: Node::new(bounds, 0),
            capacity,
            len: 0,
        }
    }

    /// Insert a point and its payload.
    ///
    /// Returns `false`, leaving the tree unchanged, iff the point lies
    /// outside the world region; probing with out-of-range points is fine.
    /// A point on a split line is contained by more than one quadrant
    /// (containment is inclusive); ownership is fixed by delegating to the
    /// children in NE, SE, SW, NW order and keeping the first taker.
    ///
    /// Coordinates are assumed finite (no NaNs).
    ///
    /// # Panics
    ///
    /// If an in-bounds point is refused by all four quadrants of a
    /// subdivided node. The quadrants tile their parent, so this indicates
    /// a geometry bug, never a caller error.
    pub fn insert(&mut self, point: Point, payload: P) -> bool {
        debug_assert!(
            point.x.is_finite() && point.y.is_finite(),
            "quadtree points must have finite coordinates"
        );
        let accepted = self.root.insert(point, payload, self.capacity);
        if accepted {
            self.len += 1;
        }
        accepted
    }

    /// Visit every stored point contained in `query`, in deterministic
    /// pre-order (bucket order within a node, then the NW, NE, SW, SE
    /// children). Subtrees whose region shares no area with `query` are
    /// pruned.
    pub fn visit_region<F: FnMut(Point, P)>(&self, query: Region, mut f: F) {
        self.root.visit_region(&query, &mut f);
    }

    /// Collect every stored point contained in `query`.
    ///
    /// See [`visit_region`][Self::visit_region] for the non-allocating form
    /// and the result order.
    pub fn query_region(&self, query: Region) -> Vec<(Point, P)> {
        let mut out = Vec::new();
        self.visit_region(query, |p, payload| out.push((p, payload)));
        out
    }

    /// Visit every point bucketed along the containment chain of `probe`:
    /// the points of each node whose region contains the probe point,
    /// frozen ancestors included.
    ///
    /// This is a coarse collision-candidate filter ("who shares my
    /// regions?"), not a radius search. A probe on a split line follows all
    /// containing chains. Out-of-bounds probes visit nothing.
    pub fn visit_neighbors<F: FnMut(Point, P)>(&self, probe: Point, mut f: F) {
        self.root.visit_neighbors(probe, &mut f);
    }

    /// Collect the containment-chain neighbors of `probe`.
    ///
    /// See [`visit_neighbors`][Self::visit_neighbors].
    pub fn query_neighbors(&self, probe: Point) -> Vec<(Point, P)> {
        let mut out = Vec::new();
        self.visit_neighbors(probe, |p, payload| out.push((p, payload)));
        out
    }

    /// Visit the region of every node with its depth, in pre-order (self,
    /// then NW, NE, SW, SE recursively). Stable for a fixed tree shape;
    /// intended for diagnostic rendering of the subdivision.
    pub fn visit_regions<F: FnMut(Region, u16)>(&self, mut f: F) {
        self.root.visit_regions(&mut f);
    }

    /// Collect every node's region and depth.
    ///
    /// See [`visit_regions`][Self::visit_regions] for the order.
    pub fn regions(&self) -> Vec<(Region, u16)> {
        let mut out = Vec::new();
        self.visit_regions(|r, depth| out.push((r, depth)));
        out
    }

    /// Discard all points and children, returning the tree to its
    /// freshly-constructed state over the original bounds and capacity.
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.region, 0);
        self.len = 0;
    }

    /// Rebuild the tree from scratch: [`clear`][Self::clear], then insert
    /// `entries` in order. Returns how many were accepted (out-of-bounds
    /// entries are dropped, as with [`insert`][Self::insert]).
    ///
    /// This is the supported way to reflect moved points; the result is
    /// equivalent to constructing a new tree with the same bounds and
    /// capacity.
    pub fn reset<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (Point, P)>,
    {
        self.clear();
        let mut accepted = 0;
        for (point, payload) in entries {
            if self.insert(point, payload) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bucket capacity nodes split at.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The world region the tree was constructed over.
    pub fn bounds(&self) -> Region {
        self.root.region
    }

    /// Number of nodes, counting the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<P: Copy + Debug> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.region)
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Debug> Node<P> {
    fn new(region: Region, depth: u16) -> Self {
        Self {
            region,
            depth,
            bucket: SmallVec::new(),
            children: None,
        }
    }

    fn insert(&mut self, point: Point, payload: P, capacity: usize) -> bool {
        if !self.region.contains(point) {
            return false;
        }
        if self.children.is_none() {
            // Nodes at the depth floor keep absorbing points instead of
            // splitting; see `MAX_DEPTH`.
            if self.bucket.len() < capacity || self.depth >= MAX_DEPTH {
                self.bucket.push((point, payload));
                return true;
            }
            self.subdivide();
        }
        if let Some(q) = self.children.as_deref_mut()
            && (q.ne.insert(point, payload, capacity)
                || q.se.insert(point, payload, capacity)
                || q.sw.insert(point, payload, capacity)
                || q.nw.insert(point, payload, capacity))
        {
            return true;
        }
        // The quadrants tile this region with inclusive edges, so a point
        // this node contains must land in one of them.
        panic!(
            "quadtree invariant violated: no quadrant of {:?} accepted contained point {:?}",
            self.region, point
        );
    }

    /// Split into four equal quadrants, one depth deeper, leaving the bucket
    /// untouched.
    fn subdivide(&mut self) {
        debug_assert!(self.children.is_none(), "node is already subdivided");
        let Region {
            min_x,
            min_y,
            max_x,
            max_y,
        } = self.region;
        let mid = self.region.center();
        let depth = self.depth + 1;
        self.children = Some(Box::new(Quadrants {
            ne: Self::new(Region::new(mid.x, min_y, max_x, mid.y), depth),
            se: Self::new(Region::new(mid.x, mid.y, max_x, max_y), depth),
            sw: Self::new(Region::new(min_x, mid.y, mid.x, max_y), depth),
            nw: Self::new(Region::new(min_x, min_y, mid.x, mid.y), depth),
        }));
    }

    fn visit_region<F: FnMut(Point, P)>(&self, query: &Region, f: &mut F) {
        // `overlaps` is strict, so degenerate or edge-flush queries only
        // register through containment; descend on any shared area.
        if !(self.region.overlaps(query)
            || self.region.encompasses(query)
            || query.encompasses(&self.region))
        {
            return;
        }
        for &(point, payload) in &self.bucket {
            if query.contains(point) {
                f(point, payload);
            }
        }
        if let Some(q) = self.children.as_deref() {
            q.nw.visit_region(query, f);
            q.ne.visit_region(query, f);
            q.sw.visit_region(query, f);
            q.se.visit_region(query, f);
        }
    }

    fn visit_neighbors<F: FnMut(Point, P)>(&self, probe: Point, f: &mut F) {
        if !self.region.contains(probe) {
            return;
        }
        for &(point, payload) in &self.bucket {
            f(point, payload);
        }
        if let Some(q) = self.children.as_deref() {
            q.nw.visit_neighbors(probe, f);
            q.ne.visit_neighbors(probe, f);
            q.sw.visit_neighbors(probe, f);
            q.se.visit_neighbors(probe, f);
        }
    }

    fn visit_regions<F: FnMut(Region, u16)>(&self, f: &mut F) {
        f(self.region, self.depth);
        if let Some(q) = self.children.as_deref() {
            q.nw.visit_regions(f);
            q.ne.visit_regions(f);
            q.sw.visit_regions(f);
            q.se.visit_regions(f);
        }
    }

    fn node_count(&self) -> usize {
        1 + self.children.as_deref().map_or(0, |q| {
            q.nw.node_count() + q.ne.node_count() + q.sw.node_count() + q.se.node_count()
        })
    }
}
