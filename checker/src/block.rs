//! Shared indentation state machine for block-style parameter sections.
//!
//! Both block conventions (Google `Args:` and NumPy `Parameters`) segment
//! their section body the same way: the first non-blank line fixes the
//! block's base indentation, lines at base indentation start a new
//! parameter entry, deeper lines continue the current entry's description,
//! and any dedent below base ends the block. Only the header shape and the
//! per-entry line pattern differ, so those arrive as data in
//! [`BlockStyleSpec`].

use param_doc_core::ParamDocs;
use regex::Regex;

use crate::indent::space_indentation;

/// Per-convention configuration for the block scanner.
pub(crate) struct BlockStyleSpec<'a> {
    /// Pattern an entry line at base indentation must match. Group 1 is
    /// the parameter name, group 2 the optional type annotation, group 3
    /// (when `inline_description` is set) the start of an inline
    /// description.
    pub entry: &'a Regex,
    /// Extra indentation the convention expects beyond the header's own
    /// (Google bodies are indented one step past `Args:`).
    pub indent_offset: usize,
    /// Whether an entry line can carry a description on the same line.
    pub inline_description: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Waiting for the first non-blank body line to fix base indentation.
    SeekingBase,
    /// Base indentation is fixed; consuming entries and continuations.
    InBlock,
    /// A dedent or malformed entry ended the section.
    Terminated,
}

/// Walks a section body line by line, collecting documented and typed
/// parameter names.
pub(crate) struct BlockScanner<'a> {
    spec: &'a BlockStyleSpec<'a>,
    state: ScanState,
    base_indent: usize,
    current: Option<String>,
    docs: ParamDocs,
}

impl<'a> BlockScanner<'a> {
    /// Creates a scanner. `header_indent` is the indentation of the section
    /// header line; it only serves as the base until the first non-blank
    /// body line overrides it.
    pub fn new(spec: &'a BlockStyleSpec<'a>, header_indent: usize) -> Self {
        Self {
            spec,
            state: ScanState::SeekingBase,
            base_indent: header_indent + spec.indent_offset,
            current: None,
            docs: ParamDocs::default(),
        }
    }

    /// Runs the scanner over a section body and returns the collected
    /// names.
    pub fn scan(mut self, body: &str) -> ParamDocs {
        for line in body.lines() {
            self.step(line);
            if self.state == ScanState::Terminated {
                break;
            }
        }
        self.docs
    }

    /// Processes one body line.
    fn step(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        let indent = space_indentation(line);
        if indent < self.base_indent {
            self.state = ScanState::Terminated;
            return;
        }

        // The first non-blank line overrides the header-derived base
        // indentation, exactly once.
        if self.state == ScanState::SeekingBase {
            self.base_indent = indent;
            self.state = ScanState::InBlock;
        }

        if indent > self.base_indent {
            self.continuation_line();
        } else {
            self.entry_line(line);
        }
    }

    /// A line deeper than base indentation describes the current entry.
    /// Recording is idempotent per parameter.
    fn continuation_line(&mut self) {
        let Some(name) = self.current.as_deref() else {
            // Invariant breach: the entry pattern accepted a line without
            // yielding a name, or the scanner was fed a body that starts
            // with a continuation.
            debug_assert!(false, "continuation line before any entry line");
            return;
        };

        if self.docs.with_description.last().map(String::as_str) != Some(name) {
            self.docs.with_description.push(name.to_string());
        }
    }

    /// A line at base indentation must start a new parameter entry. A
    /// non-matching line ends the section rather than raising an error.
    fn entry_line(&mut self, line: &str) {
        let Some(caps) = self.spec.entry.captures(line) else {
            self.state = ScanState::Terminated;
            return;
        };

        let name = caps[1].to_string();
        if caps.get(2).is_some() {
            self.docs.with_type.push(name.clone());
        }
        if self.spec.inline_description && caps.get(3).is_some() {
            self.docs.with_description.push(name.clone());
        }
        self.current = Some(name);
    }
}
