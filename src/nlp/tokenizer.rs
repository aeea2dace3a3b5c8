//! Sentence splitting and content-term tokenization
//!
//! Two strategies implement [`Tokenizer`]:
//!
//! - [`LinguisticTokenizer`] uses UAX #29 word and sentence segmentation and a
//!   full Porter stemmer (requires the `linguistic` feature).
//! - [`RegexTokenizer`] uses regular expressions and a light suffix stripper,
//!   and is always available.
//!
//! Both drop stopwords and tokens of three characters or fewer, so callers
//! can hold a `dyn Tokenizer` and not care which one is active. The choice is
//! made once through [`TokenizerKind::build`].

use crate::errors::{Result, SummarizeError};
use crate::nlp::stemmer::light_stem;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Tokens of this many characters or fewer carry no content
pub const MIN_TOKEN_CHARS: usize = 3;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex is valid"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).expect("static regex is valid"));

/// Capability shared by both tokenizer strategies
pub trait Tokenizer: fmt::Debug + Send + Sync {
    /// Strategy name for diagnostics
    fn name(&self) -> &'static str;

    /// Split a text blob into ordered, whitespace-normalized sentences.
    ///
    /// Whitespace runs, line breaks included, collapse to one space before
    /// segmentation, so hard-wrapped paragraphs split the same way under
    /// both strategies.
    fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let flat = normalize_whitespace(text);
        let mut sentences = Vec::new();
        for segment in self.sentence_segments(&flat) {
            push_sentence(&mut sentences, segment);
        }
        sentences
    }

    /// Raw sentence slices of single-spaced text
    fn sentence_segments<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Stemmed, stopword-filtered content tokens of one sentence.
    ///
    /// Duplicates are kept; the result is a multiset in sentence order.
    fn tokenize_and_stem(&self, sentence: &str) -> Vec<String>;

    /// Stopwords this tokenizer filters
    fn stopwords(&self) -> &StopwordFilter;

    /// Whether a lowercased token survives filtering
    fn is_content_token(&self, token: &str) -> bool {
        token.chars().count() > MIN_TOKEN_CHARS && !self.stopwords().is_stopword(token)
    }
}

/// Tokenizer strategy selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Linguistic when compiled in, regex otherwise
    #[default]
    Auto,
    Linguistic,
    Regex,
}

impl TokenizerKind {
    /// Whether the linguistic tokenizer was compiled in
    pub fn linguistic_available() -> bool {
        cfg!(feature = "linguistic")
    }

    /// Resolve `Auto` to a concrete strategy.
    ///
    /// Fails with `UnavailableTokenizer` when `Linguistic` is requested but
    /// not compiled in.
    pub fn resolve(self) -> Result<TokenizerKind> {
        match self {
            TokenizerKind::Auto if Self::linguistic_available() => Ok(TokenizerKind::Linguistic),
            TokenizerKind::Auto => Ok(TokenizerKind::Regex),
            TokenizerKind::Linguistic if !Self::linguistic_available() => {
                Err(SummarizeError::unavailable_tokenizer("linguistic"))
            }
            kind => Ok(kind),
        }
    }

    /// Build the tokenizer, falling back to regex when the requested
    /// strategy is unavailable
    pub fn build(self, stopwords: StopwordFilter) -> Arc<dyn Tokenizer> {
        let kind = self.resolve().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to regex tokenizer");
            TokenizerKind::Regex
        });

        match kind {
            #[cfg(feature = "linguistic")]
            TokenizerKind::Linguistic => Arc::new(LinguisticTokenizer::new(stopwords)),
            _ => Arc::new(RegexTokenizer::new(stopwords)),
        }
    }
}

impl std::str::FromStr for TokenizerKind {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(TokenizerKind::Auto),
            "linguistic" => Ok(TokenizerKind::Linguistic),
            "regex" => Ok(TokenizerKind::Regex),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown tokenizer '{}', use 'auto', 'linguistic' or 'regex'",
                other
            ))),
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_sentence(sentences: &mut Vec<Sentence>, segment: &str) {
    let text = normalize_whitespace(segment);
    if !text.is_empty() {
        let position = sentences.len();
        sentences.push(Sentence::new(text, position));
    }
}

// ============================================================================
// Regex strategy
// ============================================================================

/// Regex-only tokenizer
#[derive(Debug, Clone, Default)]
pub struct RegexTokenizer {
    stopwords: StopwordFilter,
}

impl RegexTokenizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }
}

impl Tokenizer for RegexTokenizer {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn sentence_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut segments = Vec::new();
        let mut start = 0;

        for m in SENTENCE_END.find_iter(text) {
            segments.push(&text[start..m.end()]);
            start = m.end();
        }
        if start < text.len() {
            segments.push(&text[start..]);
        }

        segments
    }

    fn tokenize_and_stem(&self, sentence: &str) -> Vec<String> {
        let lower = sentence.to_lowercase();
        let cleaned = PUNCTUATION.replace_all(&lower, "");

        cleaned
            .split_whitespace()
            .filter(|token| self.is_content_token(token))
            .map(light_stem)
            .collect()
    }

    fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

// ============================================================================
// Linguistic strategy
// ============================================================================

#[cfg(feature = "linguistic")]
pub use linguistic::LinguisticTokenizer;

#[cfg(feature = "linguistic")]
mod linguistic {
    use super::Tokenizer;
    use crate::nlp::stemmer::PorterStemmer;
    use crate::nlp::stopwords::StopwordFilter;
    use unicode_segmentation::UnicodeSegmentation;

    /// UAX #29 segmentation with Porter stemming
    #[derive(Debug, Clone, Default)]
    pub struct LinguisticTokenizer {
        stopwords: StopwordFilter,
        stemmer: PorterStemmer,
    }

    impl LinguisticTokenizer {
        pub fn new(stopwords: StopwordFilter) -> Self {
            Self {
                stopwords,
                stemmer: PorterStemmer::new(),
            }
        }
    }

    impl Tokenizer for LinguisticTokenizer {
        fn name(&self) -> &'static str {
            "linguistic"
        }

        fn sentence_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
            text.split_sentence_bounds().collect()
        }

        fn tokenize_and_stem(&self, sentence: &str) -> Vec<String> {
            let lower = sentence.to_lowercase();

            lower
                .unicode_words()
                .map(|word| word.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect::<String>())
                .filter(|token| self.is_content_token(token))
                .map(|token| self.stemmer.stem(&token))
                .collect()
        }

        fn stopwords(&self) -> &StopwordFilter {
            &self.stopwords
        }
    }
}
