//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Page;

/// A converted document: a title plus an ordered sequence of pages.
///
/// Created fresh per conversion run; the only artifact it feeds is the
/// rendered Markdown output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title (derived from the source filename)
    pub title: String,

    /// Pages in the document, in page-number order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Page::is_empty)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .filter(|page| !page.is_empty())
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
