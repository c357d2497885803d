// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebuild-per-tick driving pattern: drifting points, a fresh tree per tick.
//!
//! This example stands in for a simulation/render loop. Each tick it:
//! - moves every point along its drift vector, reflecting at the world edge,
//! - rebuilds the quadtree from the new positions with `reset`,
//! - uses `query_neighbors` as a coarse collision-candidate filter,
//! - reports how the subdivision evolved.
//!
//! Run:
//! - `cargo run -p canopy_demos --example bouncing_points`

use canopy_quadtree::{Point, QuadTree, Region, Vec2};
use rand::Rng;

const WORLD: Region = Region {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 1024.0,
    max_y: 768.0,
};
const NUM_POINTS: usize = 50;
const TICKS: usize = 10;

struct Mover {
    pos: Point,
    drift: Vec2,
}

impl Mover {
    /// Advance one tick, reflecting the drift at the world edge.
    fn step(&mut self) {
        let next = self.pos + self.drift;
        if next.x <= WORLD.min_x || next.x >= WORLD.max_x {
            self.drift.x = -self.drift.x;
        }
        if next.y <= WORLD.min_y || next.y >= WORLD.max_y {
            self.drift.y = -self.drift.y;
        }
        self.pos += self.drift;
    }
}

fn main() {
    let mut rng = rand::rng();
    let mut movers: Vec<Mover> = (0..NUM_POINTS)
        .map(|_| Mover {
            pos: Point::new(
                rng.random_range(WORLD.min_x..=WORLD.max_x),
                rng.random_range(WORLD.min_y..=WORLD.max_y),
            ),
            drift: Vec2::new(rng.random_range(-8.0..=8.0), rng.random_range(-8.0..=8.0)),
        })
        .collect();

    let mut tree: QuadTree<usize> = QuadTree::new(WORLD, 1);
    tree.reset(movers.iter().enumerate().map(|(id, m)| (m.pos, id)));

    for tick in 1..=TICKS {
        for m in &mut movers {
            m.step();
        }
        let accepted = tree.reset(movers.iter().enumerate().map(|(id, m)| (m.pos, id)));

        // Count collision candidates the way a physics pass would: for each
        // point, everything sharing its containment chain (minus itself).
        let mut candidate_pairs = 0;
        for (id, m) in movers.iter().enumerate() {
            candidate_pairs += tree
                .query_neighbors(m.pos)
                .iter()
                .filter(|&&(_, other)| other != id)
                .count();
        }

        println!(
            "tick {tick:2}: {accepted} points, {} nodes, {candidate_pairs} candidate pairs",
            tree.node_count(),
        );
    }

    println!("\nfinal tree: {tree:?}");
}
