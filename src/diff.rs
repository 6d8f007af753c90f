//! Colored unified diff rendering for text files that are about to change.

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context around each hunk.
const CONTEXT_RADIUS: usize = 3;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Renders a unified diff from the template's current content (`old`) to the
/// candidate content (`new`), labelled `a/<relative>` and `b/<relative>`.
///
/// Added lines are green and removed lines red; headers and context keep the
/// default color. Coloring follows `colored`'s global switch. Returns an empty
/// string when the two texts are equal.
pub fn render_unified_diff(old: &str, new: &str, relative: &Path) -> String {
    let text_diff = TextDiff::from_lines(old, new);
    let mut unified = text_diff.unified_diff();
    unified.context_radius(CONTEXT_RADIUS);

    let mut out = String::new();
    let mut header_written = false;
    for hunk in unified.iter_hunks() {
        if !header_written {
            out.push_str(&format!("--- a/{}\n", relative.display()));
            out.push_str(&format!("+++ b/{}\n", relative.display()));
            header_written = true;
        }
        out.push_str(&format!("{}\n", hunk.header()));
        for change in hunk.iter_changes() {
            let value = change.value().strip_suffix('\n').unwrap_or(change.value());
            let line = match change.tag() {
                ChangeTag::Insert => format!("+{}", value).green().to_string(),
                ChangeTag::Delete => format!("-{}", value).red().to_string(),
                ChangeTag::Equal => format!(" {}", value),
            };
            out.push_str(&line);
            out.push('\n');
            if change.missing_newline() {
                out.push_str(NO_NEWLINE_MARKER);
                out.push('\n');
            }
        }
    }
    out
}

/// One-line notice for a binary file that differs in preview mode.
pub fn binary_notice(relative: &Path) -> String {
    format!("Binary file differs (would update): {}", relative.display())
}
