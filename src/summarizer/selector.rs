//! Score-based sentence selection
//!
//! Picks the highest-ranked sentences and puts them back in reading order.

use crate::errors::{Result, SummarizeError};
use crate::types::{SelectionConfig, Sentence};

/// Selects the summary subset from ranked sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector {
    config: SelectionConfig,
}

impl SentenceSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Whether `n` sentences are enough to rank at all.
    ///
    /// At or below `min_sentences` the input is returned unchanged.
    pub fn needs_ranking(&self, n: usize) -> bool {
        n > self.config.min_sentences
    }

    /// `clamp(round(n · ratio), min, max)`, never more than `n`
    pub fn target_count(&self, n: usize) -> usize {
        let raw = (n as f64 * self.config.ratio).round() as usize;
        raw.max(self.config.min_sentences)
            .min(self.config.max_sentences)
            .min(n)
    }

    /// Select sentences by score.
    ///
    /// Ranks by descending score with ties broken by ascending position,
    /// keeps the first `target_count`, then restores position order.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Result<Vec<Sentence>> {
        if sentences.len() != scores.len() {
            return Err(SummarizeError::unexpected(
                "select",
                format!(
                    "{} sentences but {} scores",
                    sentences.len(),
                    scores.len()
                ),
            ));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(SummarizeError::unexpected(
                "select",
                format!("non-finite score {}", bad),
            ));
        }

        let mut ranked: Vec<(f64, &Sentence)> = scores.iter().copied().zip(sentences).collect();
        ranked.sort_by(|a, b| {
            b.0.total_cmp(&a.0)
                .then_with(|| a.1.position.cmp(&b.1.position))
        });
        ranked.truncate(self.target_count(sentences.len()));

        let mut selected: Vec<Sentence> = ranked.into_iter().map(|(_, s)| s.clone()).collect();
        selected.sort_by_key(|s| s.position);
        Ok(selected)
    }
}
