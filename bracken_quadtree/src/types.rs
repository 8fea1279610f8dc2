// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: integer points and half-open rectangles.

/// A point in 2D integer space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point2D {
    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle over integer coordinates.
///
/// The min corner is inclusive and the max corner is exclusive: a point `p`
/// lies in the rectangle iff `min_x <= p.x < max_x` and `min_y <= p.y < max_y`.
/// Half-open edges make adjacent rectangles tile without double-counting
/// points on a shared boundary line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect2D {
    /// Minimum x (left, inclusive).
    pub min_x: i64,
    /// Minimum y (top, inclusive).
    pub min_y: i64,
    /// Maximum x (right, exclusive).
    pub max_x: i64,
    /// Maximum y (bottom, exclusive).
    pub max_y: i64,
}

impl Rect2D {
    /// Create a new rectangle from min/max corners.
    ///
    /// Corners are stored as given; use [`Rect2D::canon`] to normalize a
    /// rectangle whose corners may have been supplied in reverse order.
    pub const fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// The canonical form of this rectangle: corners swapped per axis so that
    /// `min_x <= max_x` and `min_y <= max_y`.
    pub fn canon(self) -> Self {
        let (min_x, max_x) = minmax(self.min_x, self.max_x);
        let (min_y, max_y) = minmax(self.min_y, self.max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the rectangle. Negative for non-canonical corners.
    pub const fn width(self) -> i64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle. Negative for non-canonical corners.
    pub const fn height(self) -> i64 {
        self.max_y - self.min_y
    }

    /// Whether the rectangle covers no points at all.
    pub const fn is_empty(self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }

    /// Whether the point lies in this rectangle (half-open on both axes).
    pub const fn contains_point(self, p: Point2D) -> bool {
        self.min_x <= p.x && p.x < self.max_x && self.min_y <= p.y && p.y < self.max_y
    }

    /// Whether this rectangle shares any point with `other`.
    ///
    /// Empty rectangles overlap nothing, themselves included.
    pub const fn overlaps(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// The floor midpoint of the rectangle.
    pub const fn center(self) -> Point2D {
        Point2D {
            x: mid(self.min_x, self.max_x),
            y: mid(self.min_y, self.max_y),
        }
    }

    /// Split this rectangle into four quadrants at its [`center`](Self::center),
    /// in NW, NE, SW, SE order.
    ///
    /// The quadrants are contiguous and non-overlapping and cover this
    /// rectangle exactly; a point on a shared split line belongs to exactly
    /// one quadrant because edges are half-open.
    pub const fn quadrants(self) -> [Self; 4] {
        let c = self.center();
        [
            // North west
            Self::new(self.min_x, self.min_y, c.x, c.y),
            // North east
            Self::new(c.x, self.min_y, self.max_x, c.y),
            // South west
            Self::new(self.min_x, c.y, c.x, self.max_y),
            // South east
            Self::new(c.x, c.y, self.max_x, self.max_y),
        ]
    }
}

/// Floor average of two values, without overflow: `(a & b) + ((a ^ b) >> 1)`.
const fn mid(a: i64, b: i64) -> i64 {
    (a & b) + ((a ^ b) >> 1)
}

const fn minmax(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
