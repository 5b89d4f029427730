//! Human and machine readable renderings of rectangles and results.
//!
//! Rectangles are numbered from 1 in every rendering.

use std::fmt::Write;

use serde::Serialize;

use crate::overlaps::{OverlapGroup, Overlaps};
use crate::{Rect, Rectangle};

/// Lists the input rectangles, one per line.
///
/// ```text
/// 1: (100, 100), w=250, h=80.
/// ```
pub fn format_rectangles(rects: &[Rectangle]) -> String {
    let mut out = String::new();
    for rect in rects {
        let _ = writeln!(out, "{}: {}", rect.index + 1, rect.bounds);
    }
    out
}

/// Lists every group, smallest groups first.
///
/// ```text
/// Intersections
/// Between rectangles 1 and 3 at (140, 160), w=210, h=20.
/// Between rectangles 1, 3 and 4 at (160, 160), w=190, h=20.
/// ```
pub fn format_overlaps(overlaps: &Overlaps) -> String {
    if overlaps.is_empty() {
        return "No intersections\n".into();
    }
    let mut out = String::from("Intersections\n");
    for group in overlaps.groups() {
        let _ = writeln!(
            out,
            "Between rectangles {} at {}",
            member_list(group),
            group.region
        );
    }
    out
}

/// Joins 1-based member numbers as `1, 2 and 3`.
fn member_list(group: &OverlapGroup) -> String {
    let numbers: Vec<String> = group.indices.iter().map(|i| (i + 1).to_string()).collect();
    match numbers.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// JSON view of the results, written by `overlap solve --json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub groups: Vec<JsonGroup>,
}

#[derive(Debug, Serialize)]
pub struct JsonGroup {
    pub size: usize,
    /// Member numbers, 1-based and ascending.
    pub rects: Vec<usize>,
    pub region: JsonRegion,
}

#[derive(Debug, Serialize)]
pub struct JsonRegion {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl From<Rect> for JsonRegion {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            w: rect.width(),
            h: rect.height(),
        }
    }
}

impl JsonReport {
    pub fn new(overlaps: &Overlaps) -> Self {
        let groups = overlaps
            .groups()
            .map(|g| JsonGroup {
                size: g.size(),
                rects: g.indices.iter().map(|i| i + 1).collect(),
                region: g.region.into(),
            })
            .collect();
        Self { groups }
    }
}
