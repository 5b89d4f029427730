//! Reads the rectangle document.
//!
//! The document is a JSON object with a `rects` array:
//!
//! ```json
//! { "rects": [ { "x": 100, "y": 100, "w": 250, "h": 80 } ] }
//! ```
//!
//! Each entry becomes a [`Rectangle`] whose index is its position in the
//! array. Any invalid entry fails the whole load.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{Rect, Rectangle, log_debug, log_warn};

/// Default cap on the number of rectangles read from one document.
pub const MAX_RECTS: usize = 1000;

/// Why a document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("the document has no 'rects' array")]
    MissingRects,

    #[error("entry {index} is not a rectangle with integer x, y, w and h: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("entry {index} has negative dimensions (w={w}, h={h})")]
    NegativeDimensions { index: usize, w: i32, h: i32 },

    #[error("entry {index} extends past the coordinate range")]
    OutOfRange { index: usize },
}

#[derive(Debug, Deserialize)]
struct RawRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

/// Loads rectangles from a JSON file, keeping at most `limit` of them.
pub fn load_file(path: &Path, limit: usize) -> Result<Vec<Rectangle>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rects = parse(&content, limit)?;
    log_debug!("loaded {} rectangles from {}", rects.len(), path.display());
    Ok(rects)
}

/// Parses a JSON document, keeping at most `limit` rectangles.
pub fn parse(content: &str, limit: usize) -> Result<Vec<Rectangle>, LoadError> {
    let value: Value = serde_json::from_str(content)?;
    from_value(&value, limit)
}

/// Converts an already parsed document, keeping at most `limit` rectangles.
///
/// Entries past the limit are dropped without being validated.
pub fn from_value(value: &Value, limit: usize) -> Result<Vec<Rectangle>, LoadError> {
    let entries = value
        .get("rects")
        .and_then(Value::as_array)
        .ok_or(LoadError::MissingRects)?;

    if entries.len() > limit {
        log_warn!(
            "document has {} rectangles, only the first {limit} are used",
            entries.len()
        );
    }

    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| rectangle(index, entry))
        .collect()
}

fn rectangle(index: usize, entry: &Value) -> Result<Rectangle, LoadError> {
    let raw = RawRect::deserialize(entry).map_err(|e| LoadError::InvalidEntry {
        index,
        reason: e.to_string(),
    })?;

    if raw.w < 0 || raw.h < 0 {
        return Err(LoadError::NegativeDimensions {
            index,
            w: raw.w,
            h: raw.h,
        });
    }

    let (Some(right), Some(bottom)) = (raw.x.checked_add(raw.w), raw.y.checked_add(raw.h)) else {
        return Err(LoadError::OutOfRange { index });
    };

    Ok(Rectangle::new(
        index,
        Rect::from_edges(raw.x, raw.y, right, bottom),
    ))
}
