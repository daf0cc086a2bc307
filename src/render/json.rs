//! JSON rendering of the document tree, mainly for inspection and
//! debugging of the inferred structure.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation
    Pretty,
    /// Compact single-line output
    Compact,
}

/// Serialize a document tree to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Page};

    #[test]
    fn test_to_json_roundtrip() {
        let mut doc = Document::new("report");
        let mut page = Page::new(1);
        page.add_block(Block::heading(1, "第一章"));
        doc.add_page(page);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"heading\""));

        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "report");
        assert_eq!(parsed.page_count(), 1);
    }

    #[test]
    fn test_pretty_format() {
        let doc = Document::new("report");
        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
    }
}
