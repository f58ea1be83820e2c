//! NumPy `Parameters` block extraction.

use param_doc_core::{DocstringStyle, ParamDocs};

use super::StyleExtractor;
use crate::block::{BlockScanner, BlockStyleSpec};
use crate::patterns::PATTERNS;

/// NumPy convention: a `Parameters` header underlined with dashes or equals
/// signs, followed by entries of the shape `name : type` whose descriptions
/// sit on deeper-indented continuation lines. Entries share the header's
/// indentation level.
pub(crate) struct NumpyStyle;

impl NumpyStyle {
    fn spec() -> BlockStyleSpec<'static> {
        BlockStyleSpec {
            entry: &PATTERNS.numpy_entry,
            indent_offset: 0,
            inline_description: false,
        }
    }
}

impl StyleExtractor for NumpyStyle {
    fn name(&self) -> &'static str {
        "numpy"
    }

    fn style(&self) -> DocstringStyle {
        DocstringStyle::Numpy
    }

    fn applies(&self, doc: &str) -> bool {
        PATTERNS.numpy_section.is_match(doc)
    }

    fn extract(&self, doc: &str) -> ParamDocs {
        let Some(caps) = PATTERNS.numpy_section.captures(doc) else {
            return ParamDocs::default();
        };
        let header_indent = caps[1].len();
        let header_end = caps.get(0).map_or(0, |m| m.end());

        let spec = Self::spec();
        BlockScanner::new(&spec, header_indent).scan(&doc[header_end..])
    }
}
