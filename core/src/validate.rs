//! Signature validation.
//!
//! Validates structural invariants of host-supplied signatures before they
//! reach the checker: parameter names must be non-empty and distinct, and
//! variadic names must not collide with positional ones. The checker itself
//! has no error modes; this is a guard for hosts building
//! [`ParamSignature`] values from untrusted walker output.
//!
//! # Examples
//!
//! ```
//! use param_doc_core::*;
//!
//! let sig = ParamSignature::new(&["self", "path"]).with_vararg("args");
//! assert!(validate_signature(&sig).is_empty());
//!
//! // Invalid: duplicate positional name
//! let bad = ParamSignature::new(&["x", "x"]);
//! assert!(!validate_signature(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::ParamSignature;

/// Signature validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A positional parameter name is empty or whitespace-only.
    #[error("parameter name cannot be empty")]
    EmptyParamName,
    /// Two positional parameters share a name.
    #[error("duplicate parameter name: {0}")]
    DuplicateParam(String),
    /// A variadic name duplicates a positional parameter or the other
    /// variadic name.
    #[error("variadic name collides with another parameter: {0}")]
    VariadicCollision(String),
    /// A variadic name is empty or whitespace-only.
    #[error("variadic name cannot be empty")]
    EmptyVariadicName,
}

/// Validates a parameter signature.
///
/// Checks for empty names, duplicate positional parameters, and variadic
/// names colliding with positional or other variadic names.
///
/// # Examples
///
/// ```
/// use param_doc_core::*;
///
/// let sig = ParamSignature::new(&["a", "b"]).with_kwarg("kwargs");
/// assert!(validate_signature(&sig).is_empty());
///
/// // Variadic colliding with a positional → error
/// let bad = ParamSignature::new(&["a", "b"]).with_vararg("a");
/// let errors = validate_signature(&bad);
/// assert!(errors.iter().any(|e| matches!(e, SignatureError::VariadicCollision(_))));
/// ```
pub fn validate_signature(signature: &ParamSignature) -> Vec<SignatureError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for name in &signature.params {
        if name.trim().is_empty() {
            errors.push(SignatureError::EmptyParamName);
            continue;
        }
        if !seen.insert(name.as_str()) {
            errors.push(SignatureError::DuplicateParam(name.clone()));
        }
    }

    for variadic in [signature.vararg.as_deref(), signature.kwarg.as_deref()]
        .into_iter()
        .flatten()
    {
        if variadic.trim().is_empty() {
            errors.push(SignatureError::EmptyVariadicName);
            continue;
        }
        if !seen.insert(variadic) {
            errors.push(SignatureError::VariadicCollision(variadic.to_string()));
        }
    }

    errors
}
