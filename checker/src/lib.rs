//! Docstring parameter documentation checking.
//!
//! This crate checks that the parameters documented in a callable's
//! docstring match its formal parameter list. It recognizes three
//! documentation conventions — Sphinx `:param`/`:type` tags, Google `Args:`
//! blocks, and NumPy `Parameters` blocks — and reports two independent
//! kinds of mismatch:
//!
//! - [`DiagnosticKind::MissingParamDoc`] — parameter names undocumented or
//!   documented but absent from the signature.
//! - [`DiagnosticKind::MissingTypeDoc`] — parameters without a type
//!   annotation in the documentation.
//!
//! The engine is purely functional: one `(docstring, signature)` pair in,
//! zero to two [`Diagnostic`]s out, no shared state. Hosts may check many
//! callables concurrently without coordination.
//!
//! # Main entry points
//!
//! - [`check_callable`] — check one function or method against its own
//!   docstring.
//! - [`check_class`] — check a class's members; constructors
//!   (`__init__`/`__new__`) are checked against the *class* docstring.
//! - [`match_param_docs`] — extraction only, without comparison.
//!
//! # Example
//!
//! ```
//! use param_doc_checker::check_callable;
//! use param_doc_core::ParamSignature;
//!
//! let doc = ":param str path: file to read\n:param mode: open mode\n";
//! let sig = ParamSignature::new(&["self", "path", "mode"]);
//!
//! let diagnostics = check_callable("Reader.open", Some(doc), &sig);
//! // Both names documented; `mode` lacks a type.
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].names, vec!["mode"]);
//! ```
//!
//! # Tolerance rules
//!
//! Missing documentation is tolerated (only documented-but-nonexistent
//! names are still reported) when the docstring contains the delegation
//! phrase "For the (other) parameters, see ...", or when no recognized
//! convention documents any parameter — the docstring presumably uses a
//! format this checker does not know. An absent docstring produces no
//! diagnostics at all.
//!
//! [`Diagnostic`]: param_doc_core::Diagnostic
//! [`DiagnosticKind::MissingParamDoc`]: param_doc_core::DiagnosticKind
//! [`DiagnosticKind::MissingTypeDoc`]: param_doc_core::DiagnosticKind

mod block;
pub mod indent;
pub mod normalize;
mod patterns;
mod reconcile;
mod styles;

use serde::{Deserialize, Serialize};
use tracing::debug;

use param_doc_core::{Diagnostic, DocstringStyle, ParamDocs, ParamSignature};
use patterns::PATTERNS;

/// Method names treated as constructors. Members with these names are
/// checked against their class's docstring rather than their own.
pub const CONSTRUCTOR_NAMES: [&str; 2] = ["__init__", "__new__"];

/// Checks one callable's docstring against its formal parameters.
///
/// Returns zero to two diagnostics, at most one per
/// [`DiagnosticKind`](param_doc_core::DiagnosticKind), attributed to
/// `qualname`. A `None` docstring means the callable is undocumented and
/// produces no diagnostics.
///
/// # Examples
///
/// ```
/// use param_doc_checker::check_callable;
/// use param_doc_core::ParamSignature;
///
/// let doc = "\
/// Scale a vector.
///
/// Args:
///     vec (list): the vector
///     factor (float): multiplier
/// ";
/// let sig = ParamSignature::new(&["vec", "factor"]);
/// assert!(check_callable("scale", Some(doc), &sig).is_empty());
///
/// // Undocumented callables are never flagged.
/// assert!(check_callable("scale", None, &sig).is_empty());
/// ```
pub fn check_callable(
    qualname: &str,
    doc: Option<&str>,
    signature: &ParamSignature,
) -> Vec<Diagnostic> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let doc = normalize::expand_tabs(doc, normalize::TAB_WIDTH);
    let delegated = PATTERNS.delegation.is_match(&doc);
    let (style, docs) = styles::match_param_docs(&doc);
    debug!(callable = qualname, ?style, delegated, "checking docstring");

    reconcile::reconcile(qualname, signature, &docs, delegated)
}

/// Extracts documented parameter names from a docstring without comparing
/// them against a signature.
///
/// Tab expansion is applied first, then the conventions are tried in order
/// (Sphinx, Google, NumPy). Returns [`DocstringStyle::None`] with empty
/// collections when nothing matches.
///
/// # Examples
///
/// ```
/// use param_doc_checker::match_param_docs;
/// use param_doc_core::DocstringStyle;
///
/// let (style, docs) = match_param_docs(":param int x: the x\n:type y: str\n");
/// assert_eq!(style, DocstringStyle::Sphinx);
/// assert_eq!(docs.with_description, vec!["x"]);
/// assert_eq!(docs.with_type, vec!["x", "y"]);
/// ```
pub fn match_param_docs(doc: &str) -> (DocstringStyle, ParamDocs) {
    let doc = normalize::expand_tabs(doc, normalize::TAB_WIDTH);
    styles::match_param_docs(&doc)
}

/// A direct member of a class, as supplied by the host walker.
///
/// # Examples
///
/// ```
/// use param_doc_checker::ClassMember;
/// use param_doc_core::ParamSignature;
///
/// let ctor = ClassMember::new(
///     "__init__",
///     None,
///     ParamSignature::new(&["self", "x"]),
/// );
/// assert_eq!(ctor.name, "__init__");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMember {
    /// Member name within the class (unqualified).
    pub name: String,
    /// The member's own docstring, if any.
    pub doc: Option<String>,
    /// The member's formal parameters.
    pub signature: ParamSignature,
}

impl ClassMember {
    /// Creates a member descriptor.
    pub fn new(name: &str, doc: Option<&str>, signature: ParamSignature) -> Self {
        Self {
            name: name.to_string(),
            doc: doc.map(String::from),
            signature,
        }
    }
}

/// Checks a class's members.
///
/// Constructor-named members (see [`CONSTRUCTOR_NAMES`]) are checked
/// against `class_doc` and attributed to `class_qualname`, following the
/// convention that constructor parameters are documented in the class
/// docstring. Every other member is checked against its own docstring and
/// attributed as `class_qualname.member`.
///
/// # Examples
///
/// ```
/// use param_doc_checker::{ClassMember, check_class};
/// use param_doc_core::ParamSignature;
///
/// let class_doc = "A point.\n\n:param x: horizontal position\n";
/// let ctor = ClassMember::new(
///     "__init__",
///     None,
///     ParamSignature::new(&["self", "x", "y"]),
/// );
///
/// let diagnostics = check_class("geometry.Point", Some(class_doc), &[ctor]);
/// assert_eq!(diagnostics[0].callable, "geometry.Point");
/// assert_eq!(diagnostics[0].names, vec!["y"]);
/// ```
pub fn check_class(
    class_qualname: &str,
    class_doc: Option<&str>,
    members: &[ClassMember],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for member in members {
        if CONSTRUCTOR_NAMES.contains(&member.name.as_str()) {
            diagnostics.extend(check_callable(class_qualname, class_doc, &member.signature));
        } else {
            let qualname = format!("{class_qualname}.{}", member.name);
            diagnostics.extend(check_callable(
                &qualname,
                member.doc.as_deref(),
                &member.signature,
            ));
        }
    }

    diagnostics
}
