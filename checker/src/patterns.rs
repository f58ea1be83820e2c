//! Convention pattern bank.
//!
//! All recognized docstring shapes live here as pre-compiled regexes, so a
//! new convention means a new pattern plus an extractor, without touching
//! the dispatcher or the reconciler.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled patterns for the three docstring conventions.
pub(crate) static PATTERNS: LazyLock<DocPatterns> = LazyLock::new(DocPatterns::new);

pub(crate) struct DocPatterns {
    /// Sphinx `:param [type] name:` tag. Group 1 is the optional inline
    /// type token, group 2 the parameter name.
    pub sphinx_param: Regex,
    /// Sphinx `:type name:` tag. Group 1 is the parameter name.
    pub sphinx_type: Regex,

    /// Google `Args:` section header. Group 1 is the header indentation.
    pub google_section: Regex,
    /// Google per-entry line: name, optional parenthesized type, optional
    /// start of an inline description.
    pub google_entry: Regex,

    /// NumPy `Parameters` header with its dash/equals underline. Group 1 is
    /// the header indentation.
    pub numpy_section: Regex,
    /// NumPy per-entry line: name, colon, optional type token.
    pub numpy_entry: Regex,

    /// "For the (other) parameters, see ..." delegation phrase.
    pub delegation: Regex,
}

impl DocPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        Self {
            sphinx_param: Regex::new(r":param\s+(?:(\w+)\s+)?(\w+)\s*:")
                .expect("static regex must compile"),
            sphinx_type: Regex::new(r":type\s+(\w+)\s*:").expect("static regex must compile"),

            google_section: Regex::new(r"(?m)^([ ]*)Args[ \t]*:[ \t]*$")
                .expect("static regex must compile"),
            google_entry: Regex::new(r"^\s*(\w+)\s*(\(.*?\))?\s*:\s*(\w+)?")
                .expect("static regex must compile"),

            numpy_section: Regex::new(r"(?m)^([ ]*)Parameters[ \t]*$\s*[-=]+[ \t]*$")
                .expect("static regex must compile"),
            numpy_entry: Regex::new(r"^\s*(\w+)\s*:\s*(\w+)?")
                .expect("static regex must compile"),

            delegation: Regex::new(r"For\s+the\s+(?:other\s+)?parameters\s*,\s+see")
                .expect("static regex must compile"),
        }
    }
}
