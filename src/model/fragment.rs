//! Extracted text fragments.

use serde::{Deserialize, Serialize};

use super::TextStyle;

/// One unit of extracted text on a page, with typographic metadata.
///
/// Fragments are produced by the extraction collaborator in reading order
/// and consumed read-only by the classifier and assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content
    pub content: String,

    /// Font name, lowercased (e.g., "helvetica-bold")
    pub font_name: String,

    /// Font size in points
    pub font_size: f32,

    /// Whether the font appears to be bold
    pub is_bold: bool,

    /// Whether the font appears to be italic
    pub is_italic: bool,
}

impl TextFragment {
    /// Create a new fragment, deriving weight and slant from the font name.
    pub fn new(content: impl Into<String>, font_name: &str, font_size: f32) -> Self {
        let font_name = font_name.to_lowercase();
        let is_bold = font_name.contains("bold") || font_name.contains("black");
        let is_italic = font_name.contains("italic") || font_name.contains("oblique");

        Self {
            content: content.into(),
            font_name,
            font_size,
            is_bold,
            is_italic,
        }
    }

    /// The inline style this fragment carries.
    pub fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.is_bold,
            italic: self.is_italic,
        }
    }
}
