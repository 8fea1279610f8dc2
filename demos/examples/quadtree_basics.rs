// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, overflow a bucket, and run coarse and exact selects.
//!
//! Run:
//! - `cargo run -p bracken_demos --example quadtree_basics`

use bracken_quadtree::{Point2D, QuadTree, Rect2D};

fn main() {
    // A 500x500 world with buckets of 4 and a depth budget of 4.
    let mut tree = QuadTree::new(Rect2D::new(0, 0, 500, 500), 4, 4);

    let landmarks = [
        (Point2D::new(0, 0), "origin stone"),
        (Point2D::new(0, 50), "west gate"),
        (Point2D::new(10, 0), "north gate"),
        (Point2D::new(460, 123), "watchtower"),
        (Point2D::new(400, 20), "well"),
        (Point2D::new(100, 350), "mill"),
        (Point2D::new(150, 200), "market"),
    ];
    for (p, name) in landmarks {
        let stored = tree.insert(p, name);
        println!("insert {name:>12} at ({:3}, {:3}): {stored}", p.x, p.y);
    }

    // A point outside the world is rejected, not stored.
    let stray = tree.insert(Point2D::new(700, 0), "stray");
    println!("insert stray outside the world: {stray}");
    println!("tree holds {} entries", tree.len());

    // Coarse selection returns whole buckets of overlapped leaves; exact
    // selection filters each point against the query rectangle.
    let viewport = Rect2D::new(0, 0, 120, 120);
    let coarse: Vec<_> = tree.select(viewport).map(|e| *e.value()).collect();
    let exact: Vec<_> = tree.select_within(viewport).map(|e| *e.value()).collect();
    println!("coarse select over {viewport:?}: {coarse:?}");
    println!("exact  select over {viewport:?}: {exact:?}");
}
