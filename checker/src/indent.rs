//! Indentation measurement for block-style docstring sections.

/// Returns the number of leading space characters in `line`.
///
/// Tabs are not counted; callers must expand tabs first (see
/// [`expand_tabs`](crate::normalize::expand_tabs)) so that indentation
/// comparisons are well-defined.
pub fn space_indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
