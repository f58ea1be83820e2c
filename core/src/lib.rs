//! Core types for docstring parameter checking.
//!
//! This crate defines the foundational types shared between a host program
//! walker and the docstring checker engine:
//!
//! - [`ParamSignature`] — the formal parameter list of a callable
//!   (positional names plus optional variadic-positional and
//!   variadic-keyword names).
//! - [`ParamDocs`] — parameter names extracted from a docstring, split into
//!   names-with-description and names-with-type.
//! - [`DocstringStyle`] — which documentation convention a docstring uses
//!   (Sphinx, Google, NumPy, or none).
//! - [`Diagnostic`] / [`DiagnosticKind`] — the two mismatch reports the
//!   checker can produce.
//!
//! Validation ([`validate_signature`]) catches structural errors in
//! host-constructed signatures such as duplicate or empty parameter names.
//!
//! # Example
//!
//! ```
//! use param_doc_core::*;
//!
//! let sig = ParamSignature::new(&["self", "path"]).with_vararg("args");
//! assert!(validate_signature(&sig).is_empty());
//! assert_eq!(sig.expected_names(), vec!["self", "path", "args"]);
//!
//! let diag = Diagnostic::new(
//!     DiagnosticKind::MissingTypeDoc,
//!     "Reader.open",
//!     vec!["path".to_string()],
//! );
//! assert_eq!(
//!     diag.message(),
//!     "\"path\" missing or differing in parameter type documentation"
//! );
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{SignatureError, validate_signature};
