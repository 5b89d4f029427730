mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::loader::MAX_RECTS;

pub use loader::{config_dir, config_path, load, load_from, try_load, try_load_from};

/// Upper bound accepted for `input.max_rects` and `--max-rects`.
pub const MAX_RECTS_CEILING: usize = 100_000;

/// Upper bound accepted for `logging.max_file_mb`.
const MAX_LOG_FILE_MB: u64 = 1024;

/// Top-level configuration for overlap.
///
/// Loaded from `~/.config/overlap/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How input documents are read.
    pub input: InputConfig,
    /// How results are printed.
    pub output: OutputConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Input document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Rectangles past this count are dropped when a document is loaded.
    pub max_rects: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_rects: MAX_RECTS,
        }
    }
}

/// Result printing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How `overlap solve` prints its results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence per group.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl Config {
    /// Clamps values to usable ranges.
    pub fn validate(&mut self) {
        self.input.max_rects = self.input.max_rects.clamp(1, MAX_RECTS_CEILING);
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, MAX_LOG_FILE_MB);
    }
}
