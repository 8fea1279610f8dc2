// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core quadtree implementation: buckets, subdivision, selection.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Point2D, Rect2D};

/// Bucket capacity used by [`QuadTree::with_defaults`].
///
/// Probably shouldn't be relied on unless you are working with small
/// datasets; see [`QuadTree::new`] for how to choose a capacity.
pub const DEFAULT_BUCKET_CAPACITY: usize = 4;

/// Depth budget used by [`QuadTree::with_defaults`].
///
/// A reasonable default for smaller datasets; see [`QuadTree::new`].
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// An immutable (point, value) pair stored in the tree.
///
/// The tree never inspects or compares the value; it only routes the entry
/// by its point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<P> {
    point: Point2D,
    value: P,
}

impl<P> Entry<P> {
    /// The entry's coordinates.
    pub fn point(&self) -> Point2D {
        self.point
    }

    /// The entry's stored value.
    pub fn value(&self) -> &P {
        &self.value
    }
}

/// A node is either a leaf holding a bucket of entries or an internal node
/// owning the four quadrant children. Never both, never neither.
#[derive(Clone, Debug)]
enum NodeKind<P> {
    Leaf(Vec<Entry<P>>),
    Internal(Box<[QuadTree<P>; 4]>),
}

/// A bucketed point quadtree over a bounded integer-coordinate region.
///
/// The tree is a single recursive type: every node covers a rectangle of the
/// plane and is either a leaf with up to `bucket_capacity` entries or an
/// internal node whose four children tile its bounds. The root is just the
/// topmost node; there is no separate wrapper.
///
/// Inserting into a full leaf subdivides it, unless the node has exhausted
/// its depth budget or its cell has become too thin to halve, in which case
/// it keeps accepting entries beyond its capacity. The budget guarantees
/// termination when many entries share (near-)identical coordinates, which
/// would otherwise subdivide forever.
#[derive(Clone, Debug)]
pub struct QuadTree<P> {
    bounds: Rect2D,
    bucket_capacity: usize,
    depth_remaining: usize,
    kind: NodeKind<P>,
}

impl<P> QuadTree<P> {
    /// Create a new, empty quadtree covering `bounds`.
    ///
    /// `bounds` is canonicalized first, so corners may be given in either
    /// order. `bucket_capacity` is the number of entries a leaf holds before
    /// it subdivides. A larger capacity uses less memory but makes fine
    /// grained selection slower; too small a capacity deepens the tree early.
    /// The right value is application dependent.
    ///
    /// `max_depth` is the number of times the tree may subdivide. Once a node
    /// has used up the budget it keeps accepting entries beyond its bucket
    /// capacity instead of splitting. Too small and selection degrades toward
    /// a linear scan; the budget exists so that entries stacked on top of
    /// each other cannot drive unbounded subdivision.
    ///
    /// # Panics
    ///
    /// Panics when `bucket_capacity` is zero or when the canonicalized
    /// `bounds` has zero width or height.
    pub fn new(bounds: Rect2D, bucket_capacity: usize, max_depth: usize) -> Self {
        assert!(bucket_capacity >= 1, "bucket_capacity must be at least 1");
        let bounds = bounds.canon();
        assert!(
            !bounds.is_empty(),
            "bounds must have a positive width and height"
        );
        Self {
            bounds,
            bucket_capacity,
            depth_remaining: max_depth,
            kind: NodeKind::Leaf(Vec::with_capacity(bucket_capacity)),
        }
    }

    /// Create a quadtree with [`DEFAULT_BUCKET_CAPACITY`] and
    /// [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Panics
    ///
    /// Panics when the canonicalized `bounds` has zero width or height.
    pub fn with_defaults(bounds: Rect2D) -> Self {
        Self::new(bounds, DEFAULT_BUCKET_CAPACITY, DEFAULT_MAX_DEPTH)
    }

    /// The rectangle this tree covers.
    pub fn bounds(&self) -> Rect2D {
        self.bounds
    }

    /// Whether the point could be stored in this tree.
    pub fn contains(&self, p: Point2D) -> bool {
        self.bounds.contains_point(p)
    }

    /// Number of entries stored in the whole tree.
    pub fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(entries) => entries.len(),
            NodeKind::Internal(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a point and value to the tree.
    ///
    /// Returns `false` when the point lies outside this tree's bounds; the
    /// tree is left unchanged. This is the only failure mode and an expected
    /// outcome for callers whose points can leave a fixed world region, so it
    /// is reported as a value rather than a panic. Duplicate points are
    /// permitted and stored as distinct entries.
    pub fn insert(&mut self, point: Point2D, value: P) -> bool {
        self.insert_entry(Entry { point, value })
    }

    fn insert_entry(&mut self, entry: Entry<P>) -> bool {
        if !self.contains(entry.point) {
            return false;
        }

        // A leaf may split only while it has depth budget and all four of
        // its quadrants would be non-empty; a cell thinner than two units
        // cannot halve.
        let can_split =
            self.depth_remaining > 0 && self.bounds.width() >= 2 && self.bounds.height() >= 2;

        match &mut self.kind {
            // The bucket here was already filled and distributed; route to
            // the one child whose quadrant holds the point.
            NodeKind::Internal(children) => {
                match children.iter_mut().find(|c| c.contains(entry.point)) {
                    Some(child) => child.insert_entry(entry),
                    // Children tile the bounds, so a point inside this node
                    // is inside exactly one child.
                    None => unreachable!("quadrants tile the node bounds"),
                }
            }
            NodeKind::Leaf(entries) => {
                // Keep the entry here while there is room, or forever once
                // the node can no longer split.
                if !can_split || entries.len() < self.bucket_capacity {
                    entries.push(entry);
                    return true;
                }
                // At capacity: split into quadrants, redistribute, and send
                // the new entry down the fresh children.
                self.subdivide();
                self.insert_entry(entry)
            }
        }
    }

    /// Replace this leaf with four quadrant children and redistribute its
    /// bucket among them.
    fn subdivide(&mut self) {
        let children = self
            .bounds
            .quadrants()
            .map(|q| Self::new(q, self.bucket_capacity, self.depth_remaining - 1));
        let previous = core::mem::replace(&mut self.kind, NodeKind::Internal(Box::new(children)));

        let NodeKind::Leaf(entries) = previous else {
            unreachable!("only leaves subdivide");
        };
        for entry in entries {
            let moved = self.insert_entry(entry);
            debug_assert!(moved, "stored entries lie within the node bounds");
        }
    }

    /// Collect all entries in leaves whose bounds overlap `rect`.
    ///
    /// The query rectangle is canonicalized first. Results are unordered and
    /// contain no duplicates; the iterator is empty when nothing overlaps.
    ///
    /// Selection is coarse by leaf: a leaf whose *bounds* overlap the query
    /// contributes its entire bucket, including entries whose points fall
    /// outside the query rectangle. This keeps the traversal cheap when the
    /// caller re-filters anyway (distance checks, precise hit tests). Use
    /// [`QuadTree::select_within`] for exact point membership.
    pub fn select(&self, rect: Rect2D) -> impl Iterator<Item = &Entry<P>> + '_ {
        let rect = rect.canon();
        let mut out = Vec::new();
        self.collect(rect, &mut out);
        out.into_iter()
    }

    /// Collect the entries whose points lie within `rect`.
    ///
    /// Exact variant of [`QuadTree::select`]: the same traversal, with each
    /// entry's point tested against the (canonicalized) query rectangle.
    pub fn select_within(&self, rect: Rect2D) -> impl Iterator<Item = &Entry<P>> + '_ {
        let rect = rect.canon();
        let mut out = Vec::new();
        self.collect(rect, &mut out);
        out.retain(|e| rect.contains_point(e.point));
        out.into_iter()
    }

    fn collect<'t>(&'t self, rect: Rect2D, out: &mut Vec<&'t Entry<P>>) {
        if !self.bounds.overlaps(rect) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(entries) => out.extend(entries.iter()),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.collect(rect, out);
                }
            }
        }
    }

    #[cfg(test)]
    fn children(&self) -> Option<&[QuadTree<P>; 4]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(children),
        }
    }

    #[cfg(test)]
    fn bucket_len(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(entries) => entries.len(),
            NodeKind::Internal(_) => 0,
        }
    }
}
