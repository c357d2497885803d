// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_quadtree --heading-base-level=0

//! Canopy Quadtree: a Kurbo-native point-region quadtree.
//!
//! Canopy Quadtree is a reusable building block for simulations, games, and
//! visualization tools that need cheap spatial answers over a set of moving
//! 2D points.
//!
//! - Insert points (with user payloads) into a bounded world region; nodes
//!   split into four quadrants once their bucket exceeds a fixed capacity.
//! - Query by rectangle ([`QuadTree::query_region`]) or by containment chain
//!   ([`QuadTree::query_neighbors`], a coarse collision-candidate filter).
//! - Enumerate every node's region with its depth
//!   ([`QuadTree::regions`]) to draw the subdivision.
//! - Rebuild from the current point set each tick with [`QuadTree::reset`].
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::{Point, QuadTree, Region};
//!
//! // A 100x100 world holding one point per node before it splits.
//! let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0), 1);
//! assert!(tree.insert(Point::new(10.0, 10.0), "a"));
//! assert!(tree.insert(Point::new(90.0, 90.0), "b"));
//!
//! // The second insert split the root into four quadrants.
//! assert_eq!(tree.node_count(), 5);
//!
//! // Range queries report the points inside the query rectangle.
//! let hits = tree.query_region(Region::new(80.0, 80.0, 100.0, 100.0));
//! assert_eq!(hits, vec![(Point::new(90.0, 90.0), "b")]);
//! ```
//!
//! ## Frozen buckets
//!
//! Splitting a full node does **not** redistribute its bucket: the points
//! already stored stay pinned to the now-interior node forever, and only
//! later insertions descend into the quadrants. This keeps subdivision O(1)
//! at the cost of the first `capacity` points of any region living one level
//! coarser than a redistributing tree would put them. It is an invariant of
//! this structure, not an optimization to apply or skip: queries observe it
//! ([`QuadTree::query_neighbors`] reports frozen ancestor points), and tests
//! pin it down.
//!
//! ## Rebuilds, not edits
//!
//! There is no point removal or relocation. The supported way to reflect
//! moved points is [`QuadTree::reset`] with the new positions: a full
//! rebuild per simulation tick. For the point counts this structure is
//! meant for, rebuilding is cheaper and simpler than keeping an
//! incrementally-balanced tree honest.
//!
//! ## API overview
//!
//! - [`QuadTree`]: the tree; generic over a `Copy` payload attached to each
//!   point.
//! - [`Region`]: axis-aligned world/query rectangle with inclusive point
//!   containment and strict rectangle overlap (the asymmetry is deliberate;
//!   see its docs).
//! - [`Point`]: re-exported [`kurbo::Point`]; construction, distance, and
//!   vector arithmetic come from [`kurbo`].
//! - [`MAX_DEPTH`]: the subdivision floor guaranteeing termination on
//!   coincident points.
//!
//! Float coordinates are assumed finite (no NaNs); debug builds assert.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature
//! (default) or `libm` to pick how kurbo does its float math.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use kurbo::{Point, Vec2};
pub use tree::{MAX_DEPTH, QuadTree};
pub use types::Region;
