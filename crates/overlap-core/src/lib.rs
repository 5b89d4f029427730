pub mod config;
pub mod event;
pub mod loader;
pub mod log;
pub mod overlaps;
pub mod rect;
pub mod report;
pub mod segment;
pub mod solver;

pub use loader::{LoadError, MAX_RECTS};
pub use overlaps::{OverlapGroup, Overlaps};
pub use rect::{Rect, Rectangle};
pub use segment::{Segment, SpanOverlap};
pub use solver::solve;
