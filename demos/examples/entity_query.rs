// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity viewport queries.
//!
//! Entities move in continuous (Kurbo) world space; the quadtree indexes
//! their integer grid positions so a camera viewport can be answered without
//! scanning every entity. The coarse select narrows, a precise per-entity
//! check decides.
//!
//! Run:
//! - `cargo run -p bracken_demos --example entity_query`

use bracken_quadtree::{Point2D, QuadTree, Rect2D};
use kurbo::{Point, Rect};

const WORLD: Rect2D = Rect2D::new(0, 0, 1024, 1024);

/// Snap a continuous position onto the integer grid the index covers.
fn grid_point(p: Point) -> Point2D {
    Point2D::new(p.x.floor() as i64, p.y.floor() as i64)
}

fn grid_rect(r: Rect) -> Rect2D {
    Rect2D::new(
        r.x0.floor() as i64,
        r.y0.floor() as i64,
        r.x1.ceil() as i64,
        r.y1.ceil() as i64,
    )
}

fn main() {
    let mut tree: QuadTree<usize> = QuadTree::new(WORLD, 8, 6);

    // Scatter entities on a deterministic spiral.
    let positions: Vec<Point> = (0..256)
        .map(|i| {
            let t = i as f64 * 0.35;
            let r = 12.0 + i as f64 * 1.8;
            Point::new(512.0 + r * t.cos(), 512.0 + r * t.sin())
        })
        .collect();
    for (i, p) in positions.iter().enumerate() {
        // The spiral stays inside the world, so every insert lands.
        let stored = tree.insert(grid_point(*p), i);
        debug_assert!(stored, "spiral points stay inside the world bounds");
    }
    println!("indexed {} of {} entities", tree.len(), positions.len());

    // Camera viewport in continuous space.
    let viewport = Rect::new(400.0, 400.0, 624.0, 624.0);
    let candidates: Vec<_> = tree.select(grid_rect(viewport)).collect();

    // Precise pass over the narrowed candidate set only.
    let visible: Vec<usize> = candidates
        .iter()
        .map(|e| *e.value())
        .filter(|&i| viewport.contains(positions[i]))
        .collect();

    println!(
        "viewport {viewport:?}: {} candidates from the index, {} actually visible",
        candidates.len(),
        visible.len()
    );
    assert!(visible.len() <= candidates.len());
}
