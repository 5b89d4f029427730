use std::fmt;

use crate::segment::{Segment, SpanOverlap};

/// An axis-aligned rectangle stored by its edges.
///
/// `top` is the smaller vertical coordinate. Rectangles produced by
/// [`Rect::intersection`] may be degenerate or inverted when the inputs
/// don't overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// The span covered along the horizontal axis.
    pub fn horizontal(&self) -> Segment {
        Segment::new(self.left, self.right)
    }

    /// The span covered along the vertical axis.
    pub fn vertical(&self) -> Segment {
        Segment::new(self.top, self.bottom)
    }

    /// Returns whether both spans strictly overlap.
    ///
    /// Rectangles that share only an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.horizontal().intersects(&other.horizontal())
            && self.vertical().intersects(&other.vertical())
    }

    /// Component-wise intersection of the two rectangles.
    ///
    /// Always defined; guard with [`Rect::intersects`] when a real overlap
    /// is required.
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), w={}, h={}.",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}

/// A rectangle from the input set together with its stable index.
///
/// The index is assigned once by the loader and identifies the rectangle
/// in every overlap group it takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub index: usize,
    pub bounds: Rect,
}

impl Rectangle {
    pub fn new(index: usize, bounds: Rect) -> Self {
        Self { index, bounds }
    }

    pub fn left(&self) -> i32 {
        self.bounds.left
    }

    pub fn right(&self) -> i32 {
        self.bounds.right
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.bounds.intersects(&other.bounds)
    }

    pub fn intersection(&self, other: &Rectangle) -> Rect {
        self.bounds.intersection(&other.bounds)
    }

    /// Returns the vertical span shared with `other`, tagged with both indices.
    ///
    /// `None` when the horizontal spans don't overlap or the vertical
    /// overlap is empty.
    pub fn vertical_overlap_with(&self, other: &Rectangle) -> Option<SpanOverlap> {
        if !self
            .bounds
            .horizontal()
            .intersects(&other.bounds.horizontal())
        {
            return None;
        }
        let span = self.bounds.vertical().intersection(&other.bounds.vertical());
        if span.is_empty() {
            return None;
        }
        Some(SpanOverlap {
            span,
            index: self.index,
            other: other.index,
        })
    }
}
