use overlap_core::report;

use crate::InputArgs;

pub fn execute(args: &InputArgs) {
    let config = super::setup(args);
    let rects = super::load_rectangles(args, &config);
    print!("{}", report::format_rectangles(&rects));
}
