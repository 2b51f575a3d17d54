pub mod classifier;
pub mod line_state;

pub use classifier::LineClassifier;
pub use line_state::{LineKind, LineState, tally_lines};
