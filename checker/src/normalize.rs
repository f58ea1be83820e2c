//! Docstring normalization utilities.
//!
//! Tab expansion is the only normalization the checker requires: all
//! indentation comparison downstream counts space characters, so tabs must
//! be rewritten to spaces before any line is measured.

/// Tab stop width used for docstring normalization.
pub const TAB_WIDTH: usize = 8;

/// Expands tab characters to spaces, advancing to the next multiple of
/// `tab_width`. Column tracking resets on line breaks.
pub fn expand_tabs(raw: &str, tab_width: usize) -> String {
    let mut expanded = String::with_capacity(raw.len());
    let mut column = 0usize;

    for ch in raw.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    let pad = tab_width - column % tab_width;
                    for _ in 0..pad {
                        expanded.push(' ');
                    }
                    column += pad;
                }
            }
            '\n' | '\r' => {
                expanded.push(ch);
                column = 0;
            }
            _ => {
                expanded.push(ch);
                column += 1;
            }
        }
    }

    expanded
}
