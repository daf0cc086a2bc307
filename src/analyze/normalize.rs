//! Text normalization for page-extracted text.
//!
//! Extracted text carries artifacts of the page layout: runs of blank
//! lines, mixed-encoding punctuation variants, and sentences broken at
//! line ends. Normalization repairs these without altering semantic
//! content. The whole pipeline is pure and idempotent.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizes whitespace, punctuation, and line-break artifacts.
pub struct TextNormalizer {
    excess_blank_lines: Regex,
    sentence_line_end: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            // Three or more newlines, optionally interspersed with
            // whitespace-only lines
            excess_blank_lines: Regex::new(r"\n\s*\n\s*\n+").unwrap(),
            // A line ending in terminal punctuation, not already followed
            // by a blank line
            sentence_line_end: Regex::new(r"([。！？；])[ \t]*\n([^\n])").unwrap(),
        }
    }

    /// Normalize a block of raw page text.
    ///
    /// Applies, in order: blank-line collapse, punctuation
    /// canonicalization, promotion of sentence-final line breaks to
    /// paragraph breaks, and a final trim. Returns an empty string for
    /// empty input.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let collapsed = self.excess_blank_lines.replace_all(text, "\n\n");
        let canonical = canonicalize_punctuation(&collapsed);
        let broken = self
            .sentence_line_end
            .replace_all(&canonical, "${1}\n\n${2}");

        broken.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace small-form and compatibility punctuation variants with the
/// canonical full-width forms, after NFC normalization.
///
/// Already-canonical text passes through unchanged.
fn canonicalize_punctuation(text: &str) -> String {
    text.nfc()
        .map(|c| match c {
            '﹐' => '，',
            '﹑' => '、',
            '﹒' => '。',
            '﹔' => '；',
            '﹕' => '：',
            '﹗' => '！',
            '﹖' => '？',
            _ => c,
        })
        .collect()
}
