//! # pagedown
//!
//! Structure-aware conversion of extracted PDF page content to Markdown.
//!
//! This library takes per-page streams of positioned text fragments (with
//! font name, size, weight, slant) plus raw table-cell grids — as delivered
//! by a PDF text-extraction layer — and reconstructs a semantic document
//! tree: headings at levels 1-6, paragraphs with inline emphasis, and
//! tables. Structure is inferred from lexical numbering conventions and
//! per-page font-size statistics, not from explicit markup.
//!
//! ## Quick Start
//!
//! ```
//! use pagedown::{convert_pages, PageContent, TextFragment};
//!
//! fn main() -> pagedown::Result<()> {
//!     let page = PageContent::new(
//!         vec![
//!             TextFragment::new("第一章 总则", "SimSun", 12.0),
//!             TextFragment::new("本章规定了基本原则。", "SimSun", 12.0),
//!         ],
//!         vec![],
//!     );
//!
//!     let markdown = convert_pages("report", vec![page])?;
//!     assert!(markdown.contains("# 第一章 总则"));
//!     assert!(markdown.contains("## Page 1"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading inference**: lexical numbering patterns first, a punctuation
//!   heuristic second, per-page font-size percentiles as a last resort
//! - **Paragraph grouping**: consecutive body fragments merge into styled
//!   paragraphs
//! - **Table transcription**: raw cell grids become pipe-delimited tables
//! - **Parallel processing**: pages fan out over Rayon with in-order output
//! - **Batch isolation**: one bad input never aborts the rest of a batch

pub mod analyze;
pub mod convert;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{
    transcribe, Classification, DocumentAssembler, FontPercentiles, TextNormalizer,
    TitleClassifier,
};
pub use convert::{
    default_output_path, document_title, output_file_name, scan_directory, BatchOutcome,
    ConvertOptions, Converter, ErrorMode, InMemorySource, PageContent, PageSource,
};
pub use error::{Error, Result};
pub use model::{Block, Document, Page, Paragraph, RawTable, Table, TextFragment, TextStyle};
pub use render::{to_json, JsonFormat};

/// Infer the block sequence for one page's content.
///
/// Computes the page's font-size percentiles, assembles heading and
/// paragraph blocks from the fragment stream, and appends transcribed
/// tables. Degenerate input (no fragments, no tables) yields an empty
/// sequence.
pub fn page_blocks(fragments: &[TextFragment], tables: &[RawTable]) -> Vec<Block> {
    let percentiles = FontPercentiles::from_fragments(fragments);
    let assembler = DocumentAssembler::new();

    let mut blocks = assembler.assemble(fragments, percentiles.as_ref());
    blocks.extend(transcribe(tables).into_iter().map(Block::Table));
    blocks
}

/// Convert pre-extracted pages to Markdown.
///
/// Convenience wrapper over [`Converter`] with an in-memory source.
pub fn convert_pages(title: &str, pages: Vec<PageContent>) -> Result<String> {
    let source = InMemorySource::new(pages);
    Converter::new().convert(title, &source)
}
