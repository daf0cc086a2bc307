//! The extraction collaborator contract.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{RawTable, TextFragment};

/// Extracted content for one page: ordered text fragments plus raw table
/// grids, both already in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    /// Text fragments in reading order
    pub fragments: Vec<TextFragment>,

    /// Raw table grids in reading order
    pub tables: Vec<RawTable>,
}

impl PageContent {
    /// Create page content from fragments and tables.
    pub fn new(fragments: Vec<TextFragment>, tables: Vec<RawTable>) -> Self {
        Self { fragments, tables }
    }

    /// Check if the page carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.tables.is_empty()
    }
}

/// A source of per-page extracted content.
///
/// This is the engine's only contract with the text/table extraction
/// layer, which is consumed as a black box. Implementations must be
/// thread-safe: the converter may request pages from worker threads.
pub trait PageSource: Send + Sync {
    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract content for the given page (1-indexed).
    fn page(&self, number: u32) -> Result<PageContent>;
}

/// A page source backed by pre-extracted content held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: Vec<PageContent>,
}

impl InMemorySource {
    /// Create a source from pre-extracted pages.
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }
}

impl PageSource for InMemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page(&self, number: u32) -> Result<PageContent> {
        number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i as usize))
            .cloned()
            .ok_or(Error::PageOutOfRange(number, self.page_count()))
    }
}
