//! Document model types for structured page content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! page extraction and Markdown rendering. Inputs (`TextFragment`,
//! `RawTable`) mirror what the extraction collaborator delivers; outputs
//! (`Block`, `Page`, `Document`) form the inferred document tree.

mod document;
mod fragment;
mod page;
mod paragraph;
mod table;

pub use document::Document;
pub use fragment::TextFragment;
pub use page::{Block, Page};
pub use paragraph::{Paragraph, TextStyle};
pub use table::{RawTable, Table};
