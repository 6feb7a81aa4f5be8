//! Document serialization.
//!
//! The manifest is the tool's only output: callers redirect stdout
//! straight into the site generator's configuration, so nothing else may
//! be written to it. Serialization runs only after the full nav list is
//! built — there is no partial output on failure.

use crate::nav::{NavDocument, NavError};
use std::io::Write;

/// Write `document` to `out` as pretty-printed JSON (2-space indent).
///
/// No trailing newline beyond what the serializer emits. The writer is a
/// parameter so tests can capture output in a buffer; the binary passes
/// a locked stdout handle.
pub fn write_document<W: Write>(document: &NavDocument, out: W) -> Result<(), NavError> {
    serde_json::to_writer_pretty(out, document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavEntry;

    fn render(document: &NavDocument) -> String {
        let mut buf = Vec::new();
        write_document(document, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_nav_renders_as_empty_list() {
        let doc = NavDocument { nav: vec![] };
        assert_eq!(render(&doc), "{\n  \"nav\": []\n}");
    }

    #[test]
    fn entries_render_as_single_key_objects_with_two_space_indent() {
        let doc = NavDocument {
            nav: vec![
                NavEntry {
                    title: "api reference".to_string(),
                    filename: "api_reference.md".to_string(),
                },
                NavEntry {
                    title: "faq".to_string(),
                    filename: "faq.md".to_string(),
                },
            ],
        };

        assert_eq!(
            render(&doc),
            "{\n  \"nav\": [\n    {\n      \"api reference\": \"api_reference.md\"\n    },\n    {\n      \"faq\": \"faq.md\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let doc = NavDocument { nav: vec![] };
        assert!(!render(&doc).ends_with('\n'));
    }
}
