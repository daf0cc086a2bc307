//! Page-level types.

use serde::{Deserialize, Serialize};

use super::{Paragraph, Table, TextStyle};

/// A single page in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Content blocks on the page, in reading order
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Create a page with the given blocks.
    pub fn with_blocks(number: u32, blocks: Vec<Block>) -> Self {
        Self { number, blocks }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the page is empty (no content blocks).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A content block on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with level 1-6
    Heading {
        /// Heading level (1 = most prominent)
        level: u8,
        /// Heading text
        text: String,
    },

    /// A paragraph of body text
    Paragraph(Paragraph),

    /// A transcribed table
    Table(Table),
}

impl Block {
    /// Create a heading block, clamping the level to 1-6.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create an unstyled paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph::with_text(text))
    }

    /// Create a styled paragraph block.
    pub fn styled_paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Block::Paragraph(Paragraph::styled(text, style))
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph(p) => p.text.clone(),
            Block::Table(t) => t.plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(1);
        assert_eq!(page.number, 1);
        assert!(page.is_empty());
        assert_eq!(page.block_count(), 0);
    }

    #[test]
    fn test_block_variants() {
        let h = Block::heading(2, "Overview");
        assert!(h.is_heading());
        assert!(!h.is_paragraph());

        let p = Block::paragraph("Body text.");
        assert!(p.is_paragraph());
        assert_eq!(p.plain_text(), "Body text.");
    }

    #[test]
    fn test_heading_level_clamped() {
        let h = Block::heading(9, "Deep");
        assert!(matches!(h, Block::Heading { level: 6, .. }));

        let h = Block::heading(0, "Top");
        assert!(matches!(h, Block::Heading { level: 1, .. }));
    }

    #[test]
    fn test_page_plain_text() {
        let mut page = Page::new(3);
        page.add_block(Block::heading(1, "Title"));
        page.add_block(Block::paragraph("Body."));
        assert_eq!(page.plain_text(), "Title\n\nBody.");
    }
}
