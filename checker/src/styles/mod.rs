//! Pluggable extractors for the supported docstring conventions.
//!
//! Each extractor targets one convention. Dispatch order matters: Sphinx is
//! detected by a simple existence check for `:param` rather than a required
//! header, so it must be tried before the block styles to avoid being
//! shadowed. The first convention whose applicability condition holds wins.

mod google;
mod numpy;
mod sphinx;

use param_doc_core::{DocstringStyle, ParamDocs};
use tracing::debug;

use google::GoogleStyle;
use numpy::NumpyStyle;
use sphinx::SphinxStyle;

/// Extractor for one docstring convention.
pub(crate) trait StyleExtractor {
    fn name(&self) -> &'static str;
    fn style(&self) -> DocstringStyle;
    /// Whether this convention's applicability condition holds for `doc`.
    fn applies(&self, doc: &str) -> bool;
    /// Extracts documented and typed parameter names. Only called when
    /// [`applies`](StyleExtractor::applies) returned `true`.
    fn extract(&self, doc: &str) -> ParamDocs;
}

/// Matches parameter documentation against the known conventions.
///
/// Returns the selected style and the extracted names. When no convention
/// applies, returns [`DocstringStyle::None`] with empty collections; that
/// is a normal outcome, not an error.
pub(crate) fn match_param_docs(doc: &str) -> (DocstringStyle, ParamDocs) {
    let sphinx = SphinxStyle;
    let google = GoogleStyle;
    let numpy = NumpyStyle;
    let extractors: [&dyn StyleExtractor; 3] = [&sphinx, &google, &numpy];

    for extractor in extractors {
        if extractor.applies(doc) {
            debug!(style = extractor.name(), "matched docstring convention");
            return (extractor.style(), extractor.extract(doc));
        }
    }

    debug!("no docstring convention matched");
    (DocstringStyle::None, ParamDocs::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphinx_wins_over_block_styles() {
        // A docstring that carries both a :param tag and an Args: header
        // must be handled by the Sphinx extractor.
        let doc = ":param x: the x\n\nArgs:\n    y: the y\n";
        let (style, docs) = match_param_docs(doc);
        assert_eq!(style, DocstringStyle::Sphinx);
        assert_eq!(docs.with_description, vec!["x"]);
    }

    #[test]
    fn test_unrecognized_convention_is_none() {
        let (style, docs) = match_param_docs("Does things to x and y.\n");
        assert_eq!(style, DocstringStyle::None);
        assert!(docs.with_description.is_empty());
        assert!(docs.with_type.is_empty());
    }

    #[test]
    fn test_google_tried_before_numpy() {
        let doc = "Args:\n    x: the x\n\nParameters\n----------\ny : int\n";
        let (style, _) = match_param_docs(doc);
        assert_eq!(style, DocstringStyle::Google);
    }
}
