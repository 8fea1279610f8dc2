// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_quadtree --heading-base-level=0

//! Bracken Quadtree: a bucketed point quadtree over bounded 2D integer coordinates.
//!
//! Bracken Quadtree is a reusable building block for "what is near this
//! region" lookups over a 2D point set, without rescanning the whole set.
//!
//! - Insert (point, value) pairs inside a fixed world rectangle.
//! - Query all entries in an axis-aligned rectangle with [`QuadTree::select`]
//!   (coarse, leaf-granular) or [`QuadTree::select_within`] (exact).
//! - Leaves subdivide when a bucket overflows; a depth budget caps
//!   subdivision so coincident points cannot recurse forever.
//!
//! All rectangles are half-open: a point is inside iff it is `>=` the min
//! corner and `<` the max corner on both axes. That makes quadrants tile a
//! parent exactly, with boundary points belonging to exactly one quadrant.
//!
//! The tree is generic over the stored value type and never inspects values.
//! It is single-threaded by construction: insertion takes `&mut self`,
//! queries take `&self`, and exclusion around shared access belongs to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! use bracken_quadtree::{Point2D, QuadTree, Rect2D};
//!
//! // A 500x500 world, buckets of 4 entries, at most 4 subdivisions.
//! let mut tree = QuadTree::new(Rect2D::new(0, 0, 500, 500), 4, 4);
//!
//! assert!(tree.insert(Point2D::new(10, 10), "camp"));
//! assert!(tree.insert(Point2D::new(460, 123), "tower"));
//! assert!(tree.insert(Point2D::new(400, 20), "well"));
//!
//! // Out-of-bounds points are reported, not stored.
//! assert!(!tree.insert(Point2D::new(900, 900), "lost"));
//! assert_eq!(tree.len(), 3);
//!
//! // Entries whose points fall in the north-east quarter.
//! let names: Vec<_> = tree
//!     .select_within(Rect2D::new(250, 0, 500, 250))
//!     .map(|e| *e.value())
//!     .collect();
//! assert_eq!(names.len(), 2);
//! assert!(names.contains(&"tower") && names.contains(&"well"));
//! ```
//!
//! ## Coarse versus exact selection
//!
//! [`QuadTree::select`] includes the entire bucket of every leaf whose bounds
//! overlap the query, so it can return entries lying outside the query
//! rectangle. This mirrors how callers with their own precise filter (circle
//! distance checks, per-entity hit tests) use the tree: the index narrows,
//! the caller decides. When you want the rectangle to be the filter, use
//! [`QuadTree::select_within`].
//!
//! ## Choosing capacity and depth
//!
//! - `bucket_capacity`: larger buckets mean fewer nodes but coarser
//!   selection; smaller buckets subdivide early. Tune per workload.
//! - `max_depth`: bounds the subdivision count. A node that has spent the
//!   budget accepts entries past its capacity instead of splitting, which
//!   keeps stacked or densely clustered points from recursing without end.
//!
//! [`QuadTree::with_defaults`] picks a small-dataset-friendly pair
//! ([`DEFAULT_BUCKET_CAPACITY`], [`DEFAULT_MAX_DEPTH`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::{DEFAULT_BUCKET_CAPACITY, DEFAULT_MAX_DEPTH, Entry, QuadTree};
pub use types::{Point2D, Rect2D};
