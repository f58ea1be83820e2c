//! Sphinx `:param` / `:type` tag extraction.

use param_doc_core::{DocstringStyle, ParamDocs};

use super::StyleExtractor;
use crate::patterns::PATTERNS;

/// Single-line-tag convention: `:param [type] name:` declares a parameter,
/// `:type name:` declares its type separately. Tags are matched anywhere in
/// the text, in any order.
pub(crate) struct SphinxStyle;

impl StyleExtractor for SphinxStyle {
    fn name(&self) -> &'static str {
        "sphinx"
    }

    fn style(&self) -> DocstringStyle {
        DocstringStyle::Sphinx
    }

    fn applies(&self, doc: &str) -> bool {
        // A lone :type tag does not select this convention.
        PATTERNS.sphinx_param.is_match(doc)
    }

    fn extract(&self, doc: &str) -> ParamDocs {
        let mut docs = ParamDocs::default();

        for caps in PATTERNS.sphinx_param.captures_iter(doc) {
            let name = caps[2].to_string();
            if caps.get(1).is_some() {
                docs.with_type.push(name.clone());
            }
            docs.with_description.push(name);
        }

        for caps in PATTERNS.sphinx_type.captures_iter(doc) {
            docs.with_type.push(caps[1].to_string());
        }

        docs
    }
}
