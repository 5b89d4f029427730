use overlap_core::config::OutputFormat;
use overlap_core::report::{self, JsonReport};

use crate::SolveArgs;

/// Loads the document, runs the sweep and prints the groups.
///
/// Text output lists the input rectangles first, then the intersections.
/// `--json` or `format = "json"` prints only the JSON report.
pub fn execute(args: &SolveArgs) {
    let config = super::setup(&args.input);
    let rects = super::load_rectangles(&args.input, &config);
    let overlaps = overlap_core::solve(&rects);
    overlap_core::log_info!(
        "{}: {} rectangles, {} overlap groups",
        args.input.file.display(),
        rects.len(),
        overlaps.group_count()
    );

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Text => {
            println!("Input:");
            print!("{}", report::format_rectangles(&rects));
            println!();
            print!("{}", report::format_overlaps(&overlaps));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&JsonReport::new(&overlaps)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: could not encode results: {e}");
                std::process::exit(1);
            }
        },
    }
}
