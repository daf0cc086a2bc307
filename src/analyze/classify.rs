//! Heading classification for text fragments.
//!
//! Classification runs three tiers in fixed order with short-circuit on the
//! first match: lexical numbering patterns, the short-text-ending-in-colon
//! heuristic, and finally the page's font-size percentiles. Lexical cues are
//! far more reliable than font size, which varies by document and can
//! misfire on emphasized body text, so font size is the last resort.

use regex::Regex;

use super::FontPercentiles;

/// Maximum trimmed length for the colon heuristic to apply.
const COLON_HEADING_MAX_CHARS: usize = 50;

/// Result of classifying one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The fragment is body text.
    NotHeading,
    /// The fragment is a heading at the given level (1-6).
    Heading(u8),
}

impl Classification {
    /// The heading level, or 0 for body text.
    pub fn level(&self) -> u8 {
        match self {
            Classification::NotHeading => 0,
            Classification::Heading(level) => *level,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Classification::Heading(_))
    }
}

/// A lexical numbering convention mapped to a heading level.
struct LexicalRule {
    pattern: Regex,
    level: u8,
}

/// Classifies text fragments as headings or body text.
pub struct TitleClassifier {
    rules: Vec<LexicalRule>,
}

impl TitleClassifier {
    /// Create a classifier with the standard rule set.
    ///
    /// Rules are tested in order; earlier rules take strict precedence.
    pub fn new() -> Self {
        let table: &[(&str, u8)] = &[
            // Chapter marker: 第三章
            (r"^第[一二三四五六七八九十]+章", 1),
            // CJK numeral list marker: 二、
            (r"^[一二三四五六七八九十]+、", 2),
            // ASCII digit list marker: 3. or 3、
            (r"^[0-9]+[.、]", 2),
            // Letter list markers: A. / a、
            (r"^[A-Z][.、]", 3),
            (r"^[a-z][.、]", 3),
            // Circled digit prefix: ①
            (r"^[①-⑩]", 3),
            // Parenthesized numerals: （一） / （1）
            (r"^（[一二三四五六七八九十]+）", 4),
            (r"^（[0-9]+）", 4),
        ];

        let rules = table
            .iter()
            .map(|(pattern, level)| LexicalRule {
                pattern: Regex::new(pattern).unwrap(),
                level: *level,
            })
            .collect();

        Self { rules }
    }

    /// Classify a fragment's text content.
    ///
    /// `font_size` and `percentiles` are optional; the font-size fallback is
    /// only consulted when both are present and no lexical or punctuation
    /// rule matched.
    pub fn classify(
        &self,
        text: &str,
        font_size: Option<f32>,
        percentiles: Option<&FontPercentiles>,
    ) -> Classification {
        let text = text.trim();
        if text.is_empty() {
            return Classification::NotHeading;
        }

        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                return Classification::Heading(rule.level);
            }
        }

        if text.chars().count() < COLON_HEADING_MAX_CHARS && text.ends_with('：') {
            return Classification::Heading(3);
        }

        if let (Some(size), Some(percentiles)) = (font_size, percentiles) {
            match percentiles.level_for(size) {
                0 => Classification::NotHeading,
                level => Classification::Heading(level),
            }
        } else {
            Classification::NotHeading
        }
    }
}

impl Default for TitleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> u8 {
        TitleClassifier::new().classify(text, None, None).level()
    }

    #[test]
    fn test_lexical_patterns() {
        assert_eq!(classify("第三章 总则"), 1);
        assert_eq!(classify("二、背景"), 2);
        assert_eq!(classify("3. 引言"), 2);
        assert_eq!(classify("12、范围"), 2);
        assert_eq!(classify("A. 概述"), 3);
        assert_eq!(classify("a. 细则"), 3);
        assert_eq!(classify("①说明"), 3);
        assert_eq!(classify("（五）附则"), 4);
        assert_eq!(classify("（2）条款"), 4);
    }

    #[test]
    fn test_lexical_beats_font_size() {
        let classifier = TitleClassifier::new();
        let percentiles = FontPercentiles {
            h4: 20.0,
            h5: 16.0,
            h6: 12.0,
        };
        // Huge font, but the chapter marker wins
        let result = classifier.classify("第一章 总则", Some(30.0), Some(&percentiles));
        assert_eq!(result, Classification::Heading(1));
    }

    #[test]
    fn test_colon_heuristic() {
        assert_eq!(classify("适用范围："), 3);
        // Half-width colon does not count
        assert_eq!(classify("适用范围:"), 0);
        // Long text ending in a colon is not a heading
        let long: String = "条".repeat(50) + "：";
        assert_eq!(classify(&long), 0);
        // 49 characters plus the colon is exactly at the limit
        let just_under: String = "条".repeat(48) + "：";
        assert_eq!(classify(&just_under), 3);
    }

    #[test]
    fn test_font_fallback() {
        let classifier = TitleClassifier::new();
        let percentiles = FontPercentiles {
            h4: 20.0,
            h5: 16.0,
            h6: 12.0,
        };
        let classify_size =
            |size: f32| classifier.classify("普通文本", Some(size), Some(&percentiles));

        assert_eq!(classify_size(22.0), Classification::Heading(4));
        assert_eq!(classify_size(17.0), Classification::Heading(5));
        assert_eq!(classify_size(13.0), Classification::Heading(6));
        assert_eq!(classify_size(10.0), Classification::NotHeading);
    }

    #[test]
    fn test_fallback_requires_both_inputs() {
        let classifier = TitleClassifier::new();
        let percentiles = FontPercentiles {
            h4: 20.0,
            h5: 16.0,
            h6: 12.0,
        };
        assert_eq!(
            classifier.classify("普通文本", Some(30.0), None),
            Classification::NotHeading
        );
        assert_eq!(
            classifier.classify("普通文本", None, Some(&percentiles)),
            Classification::NotHeading
        );
    }

    #[test]
    fn test_not_a_heading() {
        let long = "这是一段足够长的正文内容，不以冒号结尾，也没有任何编号前缀，因此不应当被识别为标题。这里再补充一些文字保证长度超过五十个字符。";
        assert!(long.chars().count() >= 50);
        assert_eq!(classify(long), 0);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(classify(""), 0);
        assert_eq!(classify("   \n  "), 0);
    }

    #[test]
    fn test_marker_must_be_prefix() {
        assert_eq!(classify("见第三章 总则"), 0);
        assert_eq!(classify("参见（五）附则"), 0);
    }
}
