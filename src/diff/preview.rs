use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Number of lines removed and added between two buffers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub removed: usize,
    pub added: usize,
}

/// Render a unified diff of `before` -> `after`, labelled with `path`.
///
/// Returns an empty string when the buffers are equal.
pub fn render_unified_diff(path: &Path, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let label = path.display().to_string();
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}

/// Count changed lines between two buffers
pub fn line_stats(before: &str, after: &str) -> LineStats {
    let diff = TextDiff::from_lines(before, after);
    let mut stats = LineStats::default();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => stats.removed += 1,
            ChangeTag::Insert => stats.added += 1,
            ChangeTag::Equal => {}
        }
    }
    stats
}
