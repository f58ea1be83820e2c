//! Reconciliation of extracted names against the formal signature.
//!
//! Produces at most one diagnostic per kind. The normal comparison is a
//! symmetric difference, so undocumented real parameters and documented
//! nonexistent parameters are flagged together. Two conditions relax that
//! to a one-sided check (only documented-but-nonexistent names reported):
//! an explicit delegation phrase in the text, or an extraction that found
//! no documented names at all — the docstring presumably uses a convention
//! this checker does not recognize.

use std::collections::BTreeSet;

use param_doc_core::{Diagnostic, DiagnosticKind, ParamDocs, ParamSignature};

/// Names never required in parameter documentation: the implicit first
/// parameter of bound and class methods.
pub(crate) const NOT_NEEDED_IN_DOCSTRING: [&str; 2] = ["self", "cls"];

/// Compares the signature with the extracted names and builds the
/// diagnostics. `delegated` reports whether the delegation phrase was found
/// anywhere in the docstring.
pub(crate) fn reconcile(
    callable: &str,
    signature: &ParamSignature,
    docs: &ParamDocs,
    delegated: bool,
) -> Vec<Diagnostic> {
    let tolerate = delegated || docs.is_empty();

    let expected: BTreeSet<&str> = signature.expected_names().into_iter().collect();

    let name_tolerance: BTreeSet<&str> = NOT_NEEDED_IN_DOCSTRING.into_iter().collect();
    // Variadic parameters carry no individual type tags, so they extend
    // the tolerance set for the type comparison only.
    let mut type_tolerance = name_tolerance.clone();
    type_tolerance.extend(signature.variadic_names());

    let mut diagnostics = Vec::new();
    if let Some(diagnostic) = compare(
        callable,
        DiagnosticKind::MissingParamDoc,
        &expected,
        &docs.with_description,
        &name_tolerance,
        tolerate,
    ) {
        diagnostics.push(diagnostic);
    }
    if let Some(diagnostic) = compare(
        callable,
        DiagnosticKind::MissingTypeDoc,
        &expected,
        &docs.with_type,
        &type_tolerance,
        tolerate,
    ) {
        diagnostics.push(diagnostic);
    }

    diagnostics
}

fn compare(
    callable: &str,
    kind: DiagnosticKind,
    expected: &BTreeSet<&str>,
    found: &[String],
    not_needed: &BTreeSet<&str>,
    tolerate: bool,
) -> Option<Diagnostic> {
    let found: BTreeSet<&str> = found.iter().map(String::as_str).collect();

    let offending: Vec<String> = if tolerate {
        found
            .difference(expected)
            .filter(|name| !not_needed.contains(*name))
            .map(|name| name.to_string())
            .collect()
    } else {
        expected
            .symmetric_difference(&found)
            .filter(|name| !not_needed.contains(*name))
            .map(|name| name.to_string())
            .collect()
    };

    if offending.is_empty() {
        None
    } else {
        Some(Diagnostic::new(kind, callable, offending))
    }
}
