//! Type definitions for docstring parameter checking.
//!
//! This module defines the data model shared between a host (an AST walker
//! supplying callable definitions) and the checker engine. The types are
//! designed for serialization with [`serde`] so diagnostics can round-trip
//! through JSON reporting pipelines.

use serde::{Deserialize, Serialize};

/// Docstring convention detected for a piece of documentation text.
///
/// Determined per docstring, never configured: the checker tries Sphinx
/// first (a simple existence check for `:param`), then the Google and NumPy
/// block styles. `None` means "no recognized parameter documentation" and is
/// a first-class outcome, not an error.
///
/// # Examples
///
/// ```
/// use param_doc_core::DocstringStyle;
///
/// let style = DocstringStyle::default();
/// assert_eq!(style, DocstringStyle::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DocstringStyle {
    /// Sphinx `:param name:` / `:type name:` inline tags.
    Sphinx,
    /// Google `Args:` block with indented entries.
    Google,
    /// NumPy `Parameters` block with a dashed underline.
    Numpy,
    /// No recognized parameter documentation (the default).
    #[default]
    None,
}

/// Formal parameter list of a callable, as supplied by the host.
///
/// Holds the ordered positional parameter names plus the optional
/// variadic-positional (`*args`) and variadic-keyword (`**kwargs`) names.
/// All names must be distinct; [`validate_signature`](crate::validate_signature)
/// checks that invariant for host-constructed values.
///
/// # Examples
///
/// ```
/// use param_doc_core::ParamSignature;
///
/// let sig = ParamSignature::new(&["self", "path", "mode"])
///     .with_vararg("args")
///     .with_kwarg("kwargs");
/// assert_eq!(
///     sig.expected_names(),
///     vec!["self", "path", "mode", "args", "kwargs"]
/// );
/// assert_eq!(sig.variadic_names(), vec!["args", "kwargs"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSignature {
    /// Ordered positional parameter names.
    pub params: Vec<String>,
    /// Name of the variadic-positional parameter, if any (e.g. "args").
    pub vararg: Option<String>,
    /// Name of the variadic-keyword parameter, if any (e.g. "kwargs").
    pub kwarg: Option<String>,
}

impl ParamSignature {
    /// Creates a signature from positional parameter names.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_doc_core::ParamSignature;
    ///
    /// let sig = ParamSignature::new(&["x", "y"]);
    /// assert_eq!(sig.params, vec!["x", "y"]);
    /// assert!(sig.vararg.is_none());
    /// ```
    pub fn new(params: &[&str]) -> Self {
        Self {
            params: params.iter().map(|name| name.to_string()).collect(),
            vararg: None,
            kwarg: None,
        }
    }

    /// Adds a variadic-positional parameter name.
    pub fn with_vararg(mut self, name: &str) -> Self {
        self.vararg = Some(name.to_string());
        self
    }

    /// Adds a variadic-keyword parameter name.
    pub fn with_kwarg(mut self, name: &str) -> Self {
        self.kwarg = Some(name.to_string());
        self
    }

    /// Returns every name the documentation is expected to mention:
    /// positional parameters followed by the variadic names.
    pub fn expected_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.params.iter().map(String::as_str).collect();
        if let Some(vararg) = self.vararg.as_deref() {
            names.push(vararg);
        }
        if let Some(kwarg) = self.kwarg.as_deref() {
            names.push(kwarg);
        }
        names
    }

    /// Returns the variadic names only. These are exempt from type
    /// documentation, since `*args`/`**kwargs` do not carry individual
    /// type tags.
    pub fn variadic_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        if let Some(vararg) = self.vararg.as_deref() {
            names.push(vararg);
        }
        if let Some(kwarg) = self.kwarg.as_deref() {
            names.push(kwarg);
        }
        names
    }
}

/// Parameter names extracted from a docstring.
///
/// Two parallel collections rather than one record per parameter: a name can
/// carry a description, a type, or both, and the extractors append freely
/// without deduplicating. Comparison downstream uses set semantics, so
/// duplicates are harmless.
///
/// # Examples
///
/// ```
/// use param_doc_core::ParamDocs;
///
/// let mut docs = ParamDocs::default();
/// docs.with_description.push("x".to_string());
/// docs.with_type.push("x".to_string());
/// assert!(!docs.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDocs {
    /// Names that carry a description (or any `:param` mention).
    pub with_description: Vec<String>,
    /// Names that carry a type annotation.
    pub with_type: Vec<String>,
}

impl ParamDocs {
    /// True when no parameter carries a description. This is the condition
    /// that engages missing-name tolerance downstream.
    pub fn is_empty(&self) -> bool {
        self.with_description.is_empty()
    }
}

/// Kind of mismatch between a signature and its documentation.
///
/// # Examples
///
/// ```
/// use param_doc_core::DiagnosticKind;
///
/// assert_eq!(DiagnosticKind::MissingParamDoc.code(), "missing-param-doc");
/// assert_eq!(DiagnosticKind::MissingTypeDoc.code(), "missing-type-doc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A parameter name is undocumented, or a documented name does not
    /// exist in the signature.
    MissingParamDoc,
    /// A parameter lacks a type annotation in the documentation.
    MissingTypeDoc,
}

impl DiagnosticKind {
    /// Stable symbolic code for host reporting.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingParamDoc => "missing-param-doc",
            DiagnosticKind::MissingTypeDoc => "missing-type-doc",
        }
    }
}

/// A single parameter-documentation mismatch.
///
/// At most one diagnostic per [`DiagnosticKind`] is produced per check, with
/// the sorted, duplicate-free list of offending names as its payload.
///
/// # Examples
///
/// ```
/// use param_doc_core::{Diagnostic, DiagnosticKind};
///
/// let diag = Diagnostic::new(
///     DiagnosticKind::MissingParamDoc,
///     "mymodule.load",
///     vec!["path".to_string(), "mode".to_string()],
/// );
/// assert_eq!(diag.names, vec!["mode", "path"]);
/// assert_eq!(
///     diag.message(),
///     "\"mode, path\" missing or differing in parameter documentation"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Which mismatch this diagnostic reports.
    pub kind: DiagnosticKind,
    /// Qualified name of the callable (or class, for constructor checks)
    /// the diagnostic is attributed to.
    pub callable: String,
    /// Sorted, deduplicated offending parameter names.
    pub names: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic, sorting and deduplicating the offending names.
    pub fn new(kind: DiagnosticKind, callable: &str, mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self {
            kind,
            callable: callable.to_string(),
            names,
        }
    }

    /// Renders the human-readable message for this diagnostic.
    pub fn message(&self) -> String {
        let joined = self.names.join(", ");
        match self.kind {
            DiagnosticKind::MissingParamDoc => {
                format!("\"{joined}\" missing or differing in parameter documentation")
            }
            DiagnosticKind::MissingTypeDoc => {
                format!("\"{joined}\" missing or differing in parameter type documentation")
            }
        }
    }
}
