/// A one-dimensional span `[a, b]` on a single axis.
///
/// A segment with `a >= b` is empty. Two segments that only touch at a
/// single coordinate do not intersect, which is what keeps rectangles
/// sharing an edge from being reported as overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: i32,
    pub b: i32,
}

impl Segment {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Returns whether the span covers no more than a single point.
    pub fn is_empty(&self) -> bool {
        self.a >= self.b
    }

    /// Returns whether the two spans share more than a boundary point.
    ///
    /// An empty span intersects nothing, not even a span that contains it.
    pub fn intersects(&self, other: &Segment) -> bool {
        self.a.max(other.a) < self.b.min(other.b)
    }

    /// Returns the common part of both spans.
    ///
    /// Only meaningful when [`Segment::intersects`] holds; otherwise the
    /// result is empty.
    pub fn intersection(&self, other: &Segment) -> Segment {
        Segment::new(self.a.max(other.a), self.b.min(other.b))
    }
}

/// A non-empty vertical span shared by two rectangles.
///
/// `index` is the rectangle that entered the sweep, `other` is the
/// rectangle it was tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanOverlap {
    pub span: Segment,
    pub index: usize,
    pub other: usize,
}

impl SpanOverlap {
    pub fn intersects(&self, other: &SpanOverlap) -> bool {
        self.span.intersects(&other.span)
    }

    /// Sort key: lower bound first, then upper bound, then the partner index.
    pub(crate) fn order_key(&self) -> (i32, i32, usize) {
        (self.span.a, self.span.b, self.other)
    }
}
