//! Conversion driver: orchestrates the engine per page and handles the
//! filesystem surface (input scan, output naming, batch isolation).
//!
//! # Example
//!
//! ```
//! use pagedown::{Converter, InMemorySource, PageContent, TextFragment};
//!
//! fn main() -> pagedown::Result<()> {
//!     let page = PageContent::new(
//!         vec![TextFragment::new("第一章 总则", "SimSun", 12.0)],
//!         vec![],
//!     );
//!     let source = InMemorySource::new(vec![page]);
//!
//!     let markdown = Converter::new().convert("report", &source)?;
//!     assert!(markdown.contains("# 第一章 总则"));
//!     Ok(())
//! }
//! ```

mod options;
mod source;

pub use options::{ConvertOptions, ErrorMode};
pub use source::{InMemorySource, PageContent, PageSource};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rayon::prelude::*;

use crate::analyze::{transcribe, DocumentAssembler, FontPercentiles};
use crate::error::{Error, Result};
use crate::model::{Block, Document, Page};
use crate::render;

/// Converts documents from a page source into Markdown.
pub struct Converter {
    options: ConvertOptions,
    assembler: DocumentAssembler,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            assembler: DocumentAssembler::new(),
        }
    }

    /// Build the document tree for a source.
    ///
    /// Pages are independent, so they are processed in parallel unless
    /// disabled; results are collected in strict page-number order either
    /// way.
    pub fn build_document(&self, title: &str, source: &dyn PageSource) -> Result<Document> {
        let count = source.page_count();

        let pages = if self.options.parallel {
            (0..count)
                .into_par_iter()
                .map(|i| self.build_page(source, i + 1))
                .collect::<Result<Vec<Page>>>()?
        } else {
            (0..count)
                .map(|i| self.build_page(source, i + 1))
                .collect::<Result<Vec<Page>>>()?
        };

        let mut doc = Document::new(title);
        for page in pages {
            doc.add_page(page);
        }
        Ok(doc)
    }

    /// Convert a source to Markdown.
    pub fn convert(&self, title: &str, source: &dyn PageSource) -> Result<String> {
        let doc = self.build_document(title, source)?;
        render::to_markdown(&doc)
    }

    /// Convert a single document file, writing the Markdown artifact.
    ///
    /// `open` is the extraction collaborator's entry point. When `output`
    /// is not given, the artifact is written next to the input with a
    /// timestamped name. Returns the output path.
    pub fn convert_file<S, F>(
        &self,
        input: &Path,
        output: Option<&Path>,
        open: F,
    ) -> Result<PathBuf>
    where
        S: PageSource,
        F: FnOnce(&Path) -> Result<S>,
    {
        if !input.exists() {
            return Err(Error::MissingSource(input.to_path_buf()));
        }

        let source = open(input)?;
        let title = document_title(input);
        let markdown = self.convert(&title, &source)?;

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        fs::write(&output, markdown + "\n")?;

        log::debug!("converted {} -> {}", input.display(), output.display());
        Ok(output)
    }

    /// Convert a batch of documents, isolating per-document failures.
    ///
    /// One malformed or missing input does not abort the rest: each
    /// failure is logged and recorded in the outcome, and the remaining
    /// inputs proceed. Artifacts are written into `output_dir` (created
    /// if needed) with timestamped names.
    pub fn convert_batch<S, F>(
        &self,
        inputs: &[PathBuf],
        output_dir: &Path,
        open: F,
    ) -> Result<BatchOutcome>
    where
        S: PageSource,
        F: Fn(&Path) -> Result<S>,
    {
        fs::create_dir_all(output_dir)?;

        let mut outcome = BatchOutcome::default();
        for input in inputs {
            let file_name = output_file_name(&document_title(input), Local::now());
            let output = output_dir.join(file_name);

            match self.convert_file(input, Some(&output), &open) {
                Ok(path) => outcome.converted.push((input.clone(), path)),
                Err(e) => {
                    log::warn!("skipping {}: {}", input.display(), e);
                    outcome.failed.push((input.clone(), e));
                }
            }
        }
        Ok(outcome)
    }

    fn build_page(&self, source: &dyn PageSource, number: u32) -> Result<Page> {
        let content = match source.page(number) {
            Ok(content) => content,
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("page {}: extraction failed ({}), emitting empty page", number, e);
                PageContent::default()
            }
            Err(e) => return Err(e),
        };

        let percentiles = FontPercentiles::from_fragments(&content.fragments);
        let mut blocks = self
            .assembler
            .assemble(&content.fragments, percentiles.as_ref());
        blocks.extend(transcribe(&content.tables).into_iter().map(Block::Table));

        Ok(Page::with_blocks(number, blocks))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a batch conversion run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully converted inputs with their output paths
    pub converted: Vec<(PathBuf, PathBuf)>,

    /// Inputs that failed, with the error that stopped each one
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchOutcome {
    /// Check if every input converted successfully.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of inputs processed.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Derive the document title from the source filename, extension stripped.
pub fn document_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Scan a directory for input documents with a case-insensitive `.pdf`
/// extension, sorted by path.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if path.is_file() && is_pdf {
            inputs.push(path);
        }
    }

    inputs.sort();
    log::debug!("found {} input documents in {}", inputs.len(), dir.display());
    Ok(inputs)
}

/// Build the timestamped output file name: `{stem}_{YYYYMMDDHHMMSS}.md`.
pub fn output_file_name(stem: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.md", stem, at.format("%Y%m%d%H%M%S"))
}

/// Default output path: a timestamped Markdown file next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(output_file_name(&document_title(input), Local::now()))
}
