pub mod init;
pub mod list;
pub mod solve;

use overlap_core::config::{self, Config};
use overlap_core::log::{self, Level};
use overlap_core::{Rectangle, loader};

use crate::InputArgs;

/// Loads the configuration and starts logging for a command run.
///
/// `--verbose` logs to stderr and takes precedence over file logging.
pub fn setup(args: &InputArgs) -> Config {
    let config = match &args.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    if args.verbose {
        log::init_stderr(Level::Debug);
    } else {
        log::init(&config.logging);
    }
    config
}

/// Reads the rectangle document, exiting with status 1 on failure.
///
/// `--max-rects` is clamped to the same range as `input.max_rects`.
pub fn load_rectangles(args: &InputArgs, config: &Config) -> Vec<Rectangle> {
    let limit = args
        .max_rects
        .map_or(config.input.max_rects, |n| n.clamp(1, config::MAX_RECTS_CEILING));
    match loader::load_file(&args.file, limit) {
        Ok(rects) => rects,
        Err(e) => {
            overlap_core::log_error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
