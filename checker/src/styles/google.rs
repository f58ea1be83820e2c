//! Google `Args:` block extraction.

use param_doc_core::{DocstringStyle, ParamDocs};

use super::StyleExtractor;
use crate::block::{BlockScanner, BlockStyleSpec};
use crate::patterns::PATTERNS;

/// Google convention: an `Args:` header followed by entries of the shape
/// `name (type): description`, with continuation lines indented deeper than
/// the entry. Bodies sit one indentation step past the header.
pub(crate) struct GoogleStyle;

impl GoogleStyle {
    fn spec() -> BlockStyleSpec<'static> {
        BlockStyleSpec {
            entry: &PATTERNS.google_entry,
            indent_offset: 1,
            inline_description: true,
        }
    }
}

impl StyleExtractor for GoogleStyle {
    fn name(&self) -> &'static str {
        "google"
    }

    fn style(&self) -> DocstringStyle {
        DocstringStyle::Google
    }

    fn applies(&self, doc: &str) -> bool {
        PATTERNS.google_section.is_match(doc)
    }

    fn extract(&self, doc: &str) -> ParamDocs {
        let Some(caps) = PATTERNS.google_section.captures(doc) else {
            return ParamDocs::default();
        };
        let header_indent = caps[1].len();
        let header_end = caps.get(0).map_or(0, |m| m.end());

        let spec = Self::spec();
        BlockScanner::new(&spec, header_indent).scan(&doc[header_end..])
    }
}
