use crate::Rectangle;

/// A vertical rectangle edge crossed by the sweep line.
///
/// Each non-empty rectangle produces one `Enter` at its left edge and one
/// `Exit` at its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepEvent {
    /// The sweep reached the rectangle's left edge.
    Enter { index: usize, x: i32 },

    /// The sweep reached the rectangle's right edge.
    Exit { index: usize, x: i32 },
}

impl SweepEvent {
    /// Returns the index of the rectangle that owns this edge.
    pub fn index(&self) -> usize {
        match self {
            Self::Enter { index, .. } | Self::Exit { index, .. } => *index,
        }
    }

    /// Returns the horizontal coordinate of the edge.
    pub fn x(&self) -> i32 {
        match self {
            Self::Enter { x, .. } | Self::Exit { x, .. } => *x,
        }
    }

    /// Total order used by the sweep.
    ///
    /// At equal coordinates every `Exit` comes before every `Enter`, so a
    /// rectangle ending at `x` is gone before one starting at `x` arrives.
    fn sort_key(&self) -> (i32, u8, usize) {
        let rank = match self {
            Self::Exit { .. } => 0,
            Self::Enter { .. } => 1,
        };
        (self.x(), rank, self.index())
    }
}

/// Builds the sorted event stream for a set of rectangles.
///
/// Rectangles without area can't strictly overlap anything and are left
/// out; a zero-width rectangle's `Exit` would otherwise sort before its
/// own `Enter`.
pub fn events_for(rects: &[Rectangle]) -> Vec<SweepEvent> {
    let mut events = Vec::with_capacity(rects.len() * 2);
    for rect in rects.iter().filter(|r| !r.bounds.is_empty()) {
        events.push(SweepEvent::Enter {
            index: rect.index,
            x: rect.left(),
        });
        events.push(SweepEvent::Exit {
            index: rect.index,
            x: rect.right(),
        });
    }
    events.sort_by_key(SweepEvent::sort_key);
    events
}
