pub mod preview;

pub use preview::{line_stats, render_unified_diff, LineStats};
