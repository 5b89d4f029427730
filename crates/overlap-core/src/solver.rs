//! Sweep-line search for groups of overlapping rectangles.
//!
//! A vertical line sweeps left to right across the rectangle edges. The
//! rectangles it currently crosses form the active set. When a rectangle
//! enters, it is only compared against the active set, and the vertical
//! spans it shares with those rectangles are clustered into N-way groups.

use std::collections::BTreeSet;

use crate::event::{SweepEvent, events_for};
use crate::overlaps::{OverlapGroup, Overlaps};
use crate::segment::SpanOverlap;
use crate::{Rectangle, log_debug};

/// Finds every overlapping pair and the N-way groups built from them.
///
/// Rectangles must carry contiguous indices matching their position in
/// the slice, as assigned by the loader.
///
/// # Panics
///
/// Panics if a rectangle's index differs from its position.
pub fn solve(rects: &[Rectangle]) -> Overlaps {
    for (position, rect) in rects.iter().enumerate() {
        assert_eq!(
            rect.index, position,
            "rectangle indices must match their position"
        );
    }

    let events = events_for(rects);
    log_debug!(
        "solve: {} rectangles, {} sweep events",
        rects.len(),
        events.len()
    );

    let mut sweep = Sweep::new(rects);
    for event in &events {
        sweep.step(event);
    }

    let overlaps = sweep.finish();
    log_debug!(
        "solve: {} groups, largest size {}",
        overlaps.group_count(),
        overlaps.max_size().unwrap_or(0)
    );
    overlaps
}

/// State of a single sweep. Owned by one `solve` call.
struct Sweep<'a> {
    rects: &'a [Rectangle],
    active: BTreeSet<usize>,
    results: Overlaps,
}

impl<'a> Sweep<'a> {
    fn new(rects: &'a [Rectangle]) -> Self {
        Self {
            rects,
            active: BTreeSet::new(),
            results: Overlaps::new(),
        }
    }

    fn step(&mut self, event: &SweepEvent) {
        match *event {
            SweepEvent::Enter { index, .. } => {
                let candidates = self.candidates(&self.rects[index]);
                if !candidates.is_empty() {
                    self.group(&candidates);
                }
                self.active.insert(index);
            }
            SweepEvent::Exit { index, .. } => {
                self.active.remove(&index);
            }
        }
    }

    /// Vertical spans the entering rectangle shares with the active set,
    /// sorted by lower bound.
    fn candidates(&self, entering: &Rectangle) -> Vec<SpanOverlap> {
        let mut spans: Vec<_> = self
            .active
            .iter()
            .filter_map(|&i| entering.vertical_overlap_with(&self.rects[i]))
            .collect();
        spans.sort_by_key(SpanOverlap::order_key);
        spans
    }

    /// Records every pair, then grows each pair into the longest run of
    /// following spans that still share a common vertical band.
    ///
    /// Spans are sorted by lower bound, so once a span starts at or after
    /// the end of the running band no later span can reach it either.
    fn group(&mut self, spans: &[SpanOverlap]) {
        for (i, first) in spans.iter().enumerate() {
            let entering = &self.rects[first.index];
            let mut region = entering.intersection(&self.rects[first.other]);
            self.results
                .push(OverlapGroup::new([first.index, first.other], region));

            let mut members = BTreeSet::from([first.index, first.other]);
            let mut band = first.span;
            for next in &spans[i + 1..] {
                if !band.intersects(&next.span) {
                    break;
                }
                band = band.intersection(&next.span);
                members.insert(next.other);
                region = region.intersection(&self.rects[next.other].bounds);
            }

            if members.len() > 2 {
                debug_assert!(!region.is_empty(), "group region must have area");
                self.results.push(OverlapGroup {
                    indices: members,
                    region,
                });
            }
        }
    }

    fn finish(self) -> Overlaps {
        self.results
    }
}
