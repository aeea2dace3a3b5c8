//! Paragraph segmentation into introduction, body and conclusion

use crate::types::DocumentStructure;
use regex::Regex;
use std::sync::LazyLock;

/// A newline, optional whitespace, then another newline
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("static regex is valid"));

/// Share of paragraphs assigned to each of introduction and conclusion
const EDGE_SECTION_SHARE: f64 = 0.2;
const MAX_EDGE_PARAGRAPHS: usize = 2;

/// Split text on blank lines into trimmed, non-empty paragraphs
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Positional document segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStructureSegmenter;

impl DocumentStructureSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Paragraphs at each end of a document with `count` paragraphs
    pub fn edge_size(count: usize) -> usize {
        ((count as f64 * EDGE_SECTION_SHARE).round() as usize).clamp(1, MAX_EDGE_PARAGRAPHS)
    }

    /// Segment text by paragraph position.
    ///
    /// Two paragraphs or fewer all count as introduction. Otherwise the
    /// first and last [`edge_size`](Self::edge_size) paragraphs form the
    /// introduction and conclusion and the rest is body.
    pub fn segment(&self, text: &str) -> DocumentStructure {
        let mut paragraphs = split_paragraphs(text);
        let count = paragraphs.len();

        if count <= 2 {
            return DocumentStructure {
                introduction: paragraphs,
                ..Default::default()
            };
        }

        let edge = Self::edge_size(count);
        let conclusion = paragraphs.split_off(count - edge);
        let body = paragraphs.split_off(edge);

        tracing::trace!(
            paragraphs = count,
            edge,
            body = body.len(),
            "segmented document"
        );

        DocumentStructure {
            introduction: paragraphs,
            body,
            conclusion,
        }
    }
}
