//! Block assembly from the per-page fragment stream.

use crate::model::{Block, Paragraph, TextFragment, TextStyle};

use super::{Classification, FontPercentiles, TextNormalizer, TitleClassifier};

/// Groups a page's fragment stream into heading and paragraph blocks.
///
/// Consecutive non-heading fragments accumulate into one paragraph whose
/// style is taken from the paragraph's opening fragment. Mixed bold/italic
/// runs within one paragraph therefore collapse to the opening fragment's
/// style; this is the documented contract, not a defect to correct.
pub struct DocumentAssembler {
    classifier: TitleClassifier,
    normalizer: TextNormalizer,
}

impl DocumentAssembler {
    /// Create a new assembler with the standard classifier and normalizer.
    pub fn new() -> Self {
        Self {
            classifier: TitleClassifier::new(),
            normalizer: TextNormalizer::new(),
        }
    }

    /// Assemble a page's fragments into an ordered block sequence.
    ///
    /// Block order matches fragment order; no fragment is dropped or
    /// duplicated. An empty fragment sequence yields an empty block
    /// sequence.
    pub fn assemble(
        &self,
        fragments: &[TextFragment],
        percentiles: Option<&FontPercentiles>,
    ) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        let mut pending_style = TextStyle::default();

        for fragment in fragments {
            let text = self.normalizer.normalize(&fragment.content);
            let classification =
                self.classifier
                    .classify(&text, Some(fragment.font_size), percentiles);

            match classification {
                Classification::Heading(level) => {
                    flush_paragraph(&mut blocks, &mut pending, pending_style);
                    blocks.push(Block::heading(level, text));
                }
                Classification::NotHeading => {
                    if pending.is_empty() {
                        pending_style = fragment.style();
                    }
                    pending.push(text);
                }
            }
        }

        flush_paragraph(&mut blocks, &mut pending, pending_style);
        blocks
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Flush the accumulated paragraph, joining fragment texts with a single
/// space. An accumulator that joins to nothing emits no block.
fn flush_paragraph(blocks: &mut Vec<Block>, pending: &mut Vec<String>, style: TextStyle) {
    if pending.is_empty() {
        return;
    }

    let text = pending
        .drain(..)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return;
    }

    blocks.push(Block::Paragraph(Paragraph::styled(text, style)));
}
