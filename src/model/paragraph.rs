//! Paragraph and text-style types.

use serde::{Deserialize, Serialize};

/// A paragraph of body text.
///
/// The style applies to the whole paragraph: it is taken from the first
/// fragment the assembler accumulated, not tracked per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// The paragraph text
    pub text: String,

    /// Inline style for the paragraph
    pub style: TextStyle,
}

impl Paragraph {
    /// Create a paragraph with plain text and no styling.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled paragraph.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Inline styling properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}
