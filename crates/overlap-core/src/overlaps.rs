use std::collections::{BTreeMap, BTreeSet};

use crate::Rect;

/// A set of mutually overlapping rectangles and their common region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGroup {
    /// Indices of the member rectangles, ascending.
    pub indices: BTreeSet<usize>,
    /// The area shared by every member.
    pub region: Rect,
}

impl OverlapGroup {
    pub fn new(indices: impl IntoIterator<Item = usize>, region: Rect) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            region,
        }
    }

    /// Number of rectangles in the group.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Overlap groups keyed by group size.
///
/// Size 2 holds every overlapping pair, size 3 every triple found by the
/// sweep, and so on. Groups of one size keep the order they were found in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlaps {
    by_size: BTreeMap<usize, Vec<OverlapGroup>>,
}

impl Overlaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group to the bucket for its size.
    pub(crate) fn push(&mut self, group: OverlapGroup) {
        debug_assert!(group.size() >= 2, "groups need at least two members");
        self.by_size.entry(group.size()).or_default().push(group);
    }

    /// Returns the groups with exactly `size` members.
    pub fn get(&self, size: usize) -> &[OverlapGroup] {
        self.by_size.get(&size).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every overlapping pair.
    pub fn pairs(&self) -> &[OverlapGroup] {
        self.get(2)
    }

    /// Returns the group sizes that have at least one group, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_size.keys().copied()
    }

    /// Iterates the buckets in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[OverlapGroup])> {
        self.by_size.iter().map(|(size, groups)| (*size, groups.as_slice()))
    }

    /// Iterates every group, smallest sizes first.
    pub fn groups(&self) -> impl Iterator<Item = &OverlapGroup> {
        self.by_size.values().flatten()
    }

    /// Returns the size of the largest group, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.by_size.keys().next_back().copied()
    }

    /// Total number of groups across all sizes.
    pub fn group_count(&self) -> usize {
        self.by_size.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_size.is_empty()
    }
}
