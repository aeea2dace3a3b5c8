//! Frequency-based keyphrase extraction
//!
//! Candidates are alphabetic words (inner hyphens allowed) longer than three
//! characters that are not stopwords. They are ranked by raw frequency, with
//! ties kept in order of first appearance.

use crate::errors::report;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Tokenizer, TokenizerKind, MIN_TOKEN_CHARS};
use crate::types::Keyphrase;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{Arc, LazyLock};

/// Characters of context kept on each side of a term
pub const CONTEXT_WINDOW: usize = 20;

static CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z][a-zA-Z-]+[a-zA-Z]\b").expect("static regex is valid")
});

/// Keyphrase extractor sharing the summarizer's tokenizer and stopwords
#[derive(Debug, Clone)]
pub struct KeyphraseExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for KeyphraseExtractor {
    fn default() -> Self {
        Self::new(TokenizerKind::Auto.build(StopwordFilter::english()))
    }
}

impl KeyphraseExtractor {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Top `top_n` keyphrases, or an empty list on failure
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<Keyphrase> {
        self.try_extract(text, top_n).unwrap_or_else(|err| {
            report("keyphrases", &err);
            Vec::new()
        })
    }

    /// Top `top_n` terms only
    pub fn extract_terms(&self, text: &str, top_n: usize) -> Vec<String> {
        self.extract(text, top_n)
            .into_iter()
            .map(|k| k.term)
            .collect()
    }

    pub fn try_extract(&self, text: &str, top_n: usize) -> Result<Vec<Keyphrase>> {
        trace_stage!("keyphrases");

        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text for keyphrases"));
        }

        let mut candidates = self.count_candidates(text);
        // Stable sort keeps first-appearance order within equal frequencies
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        candidates.truncate(top_n);

        let sentences: Vec<String> = self
            .tokenizer
            .split_sentences(text)
            .into_iter()
            .map(|s| s.text.to_lowercase())
            .collect();

        Ok(candidates
            .into_iter()
            .map(|(term, frequency)| {
                let sample_context = sample_context(&sentences, &term);
                Keyphrase {
                    term,
                    frequency,
                    sample_context,
                }
            })
            .collect())
    }

    /// Candidate terms with counts, in order of first appearance
    fn count_candidates(&self, text: &str) -> Vec<(String, usize)> {
        let lower = text.to_lowercase();
        let stopwords = self.tokenizer.stopwords();

        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();

        for m in CANDIDATE.find_iter(&lower) {
            let word = m.as_str();
            if word.len() <= MIN_TOKEN_CHARS || stopwords.is_stopword(word) {
                continue;
            }
            match index.get(word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(word, counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }

        counts
    }
}

/// Up to [`CONTEXT_WINDOW`] characters around the first occurrence of `term`
/// in the first sentence that contains it
fn sample_context(sentences: &[String], term: &str) -> String {
    sentences
        .iter()
        .find_map(|sentence| {
            let at = sentence.find(term)?;
            let end = at + term.len();

            let start = sentence[..at]
                .char_indices()
                .rev()
                .nth(CONTEXT_WINDOW - 1)
                .map(|(i, _)| i)
                .unwrap_or(0);
            let stop = sentence[end..]
                .char_indices()
                .nth(CONTEXT_WINDOW)
                .map(|(i, _)| end + i)
                .unwrap_or(sentence.len());

            Some(sentence[start..stop].to_string())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::RegexTokenizer;

    fn extractor() -> KeyphraseExtractor {
        KeyphraseExtractor::new(Arc::new(RegexTokenizer::new(StopwordFilter::english())))
    }

    #[test]
    fn test_frequency_order() {
        let text = "Graph ranking uses graph edges. Every graph node gets ranking scores.";
        let phrases = extractor().extract(text, 5);

        assert_eq!(phrases[0].term, "graph");
        assert_eq!(phrases[0].frequency, 3);
        assert_eq!(phrases[1].term, "ranking");
        assert_eq!(phrases[1].frequency, 2);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let text = "Zebra appears before apple. Apple appears after zebra.";
        let terms = extractor().extract_terms(text, 3);
        assert_eq!(terms, vec!["zebra", "appears", "apple"]);
    }

    #[test]
    fn test_filters_short_words_and_stopwords() {
        let text = "The cat sat with them about this tree.";
        let terms = extractor().extract_terms(text, 10);
        assert_eq!(terms, vec!["tree"]);
    }

    #[test]
    fn test_hyphenated_terms() {
        let text = "State-of-the-art models beat older state-of-the-art models.";
        let terms = extractor().extract_terms(text, 2);
        assert_eq!(terms[0], "state-of-the-art");
    }

    #[test]
    fn test_terms_are_distinct_and_bounded() {
        let text = "Alpha alpha alpha beta beta gamma delta epsilon zeta.";
        let terms = extractor().extract_terms(text, 3);
        assert_eq!(terms.len(), 3);
        let mut unique = terms.clone();
        unique.dedup();
        assert_eq!(unique.len(), terms.len());
    }

    #[test]
    fn test_sample_context_window() {
        let sentences = vec!["a".repeat(30) + " keyword " + &"b".repeat(30)];
        let context = sample_context(&sentences, "keyword");
        assert_eq!(context.chars().count(), 20 + "keyword".len() + 20);
        assert!(context.contains("keyword"));
    }

    #[test]
    fn test_sample_context_multibyte() {
        let sentences = vec!["ééééé keyword ü".to_string()];
        assert_eq!(sample_context(&sentences, "keyword"), "ééééé keyword ü");
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().extract("", 5).is_empty());
        assert!(extractor().extract("   \n ", 5).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Rust makes systems programming safer. Systems benefit from Rust.";
        assert_eq!(extractor().extract(text, 5), extractor().extract(text, 5));
    }
}
