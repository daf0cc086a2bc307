//! Per-page font-size statistics.

use serde::{Deserialize, Serialize};

use crate::model::TextFragment;

/// Font-size thresholds for one page, used to rank untagged text by visual
/// prominence.
///
/// `h4`/`h5`/`h6` are the sizes at the 95th, 85th and 75th percentile of the
/// page's observed sizes; text at or above a threshold falls back to the
/// corresponding heading level when no lexical cue matched. Font usage
/// varies page to page, so thresholds are recomputed per page.
///
/// Invariant: `h4 >= h5 >= h6`, since all three index into the same
/// ascending-sorted list at increasing cut points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontPercentiles {
    /// Size at the 95th percentile
    pub h4: f32,

    /// Size at the 85th percentile
    pub h5: f32,

    /// Size at the 75th percentile
    pub h6: f32,
}

impl FontPercentiles {
    /// Compute thresholds from a page's fragments.
    ///
    /// Returns `None` when the page has no strictly positive font sizes.
    pub fn from_fragments(fragments: &[TextFragment]) -> Option<Self> {
        Self::from_sizes(fragments.iter().map(|f| f.font_size))
    }

    /// Compute thresholds from an arbitrary set of font sizes.
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>) -> Option<Self> {
        let mut sizes: Vec<f32> = sizes.into_iter().filter(|s| *s > 0.0).collect();
        if sizes.is_empty() {
            return None;
        }
        sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sizes.len();
        // For small n all cut points resolve to the same element; the clamp
        // keeps the index in range rather than erroring out.
        let at = |fraction: f32| sizes[((n as f32 * fraction) as usize).min(n - 1)];

        Some(Self {
            h4: at(0.95),
            h5: at(0.85),
            h6: at(0.75),
        })
    }

    /// Heading level for a font size: 4, 5, 6, or 0 for body-sized text.
    pub fn level_for(&self, font_size: f32) -> u8 {
        if font_size >= self.h4 {
            4
        } else if font_size >= self.h5 {
            5
        } else if font_size >= self.h6 {
            6
        } else {
            0
        }
    }
}
