// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerate region boundaries the way a renderer would fetch them.
//!
//! Builds a small clustered tree and prints every node region in pre-order
//! with depth indentation, plus the `kurbo::Rect` a drawing layer would
//! stroke.
//!
//! Run:
//! - `cargo run -p canopy_demos --example region_outlines`

use canopy_quadtree::{Point, QuadTree, Region};

fn main() {
    let world = Region::new(0.0, 0.0, 100.0, 100.0);
    let mut tree = QuadTree::new(world, 1);

    // A cluster in the north-west corner and one stray point south-east:
    // the subdivision deepens only where the points are.
    for (x, y) in [(10.0, 10.0), (12.0, 14.0), (8.0, 11.0), (90.0, 90.0)] {
        assert!(tree.insert(Point::new(x, y), ()));
    }

    println!(
        "{} points across {} nodes\n",
        tree.len(),
        tree.node_count()
    );
    tree.visit_regions(|region, depth| {
        let indent = "  ".repeat(depth as usize);
        let rect = region.to_rect();
        println!(
            "{indent}depth {depth}: ({:.1}, {:.1}) {:.1}x{:.1}  [{rect:?}]",
            region.min_x,
            region.min_y,
            region.width(),
            region.height(),
        );
    });
}
