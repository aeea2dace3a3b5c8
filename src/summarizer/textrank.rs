//! TextRank sentence summarization
//!
//! split sentences → similarity matrix → power iteration → selection

use crate::errors::{report, Result, SummarizeError};
use crate::graph::similarity::SimilarityMatrixBuilder;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Tokenizer, TokenizerKind};
use crate::pagerank::power::PowerIterationRanker;
use crate::pagerank::RankResult;
use crate::summarizer::selector::SentenceSelector;
use crate::types::{join_sentences, SelectionConfig, Sentence, SummarizerConfig};
use std::sync::Arc;

/// Ranked sentences of one text, before selection
#[derive(Debug, Clone)]
pub struct RankedSentences {
    pub sentences: Vec<Sentence>,
    pub rank: RankResult,
}

/// Extractive summarizer over one tokenizer strategy
#[derive(Debug, Clone)]
pub struct TextRankSummarizer {
    tokenizer: Arc<dyn Tokenizer>,
    ranker: PowerIterationRanker,
    parallel: bool,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new(TokenizerKind::Auto.build(StopwordFilter::english()))
    }
}

impl TextRankSummarizer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            ranker: PowerIterationRanker::default(),
            parallel: false,
        }
    }

    /// Summarizer with the tokenizer, stopwords and ranker settings of a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let stopwords = StopwordFilter::from_config(config.language.as_deref(), &config.stopwords);
        Self::new(config.tokenizer.build(stopwords))
            .with_ranker(
                PowerIterationRanker::new()
                    .with_epsilon(config.epsilon)
                    .with_max_iterations(config.max_iterations),
            )
            .with_parallel(config.parallel)
    }

    pub fn with_ranker(mut self, ranker: PowerIterationRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn ranker(&self) -> &PowerIterationRanker {
        &self.ranker
    }

    /// Split text into sentences with the active tokenizer
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.tokenizer.split_sentences(text)
    }

    /// Score already-split sentences
    pub fn rank(&self, sentences: &[Sentence]) -> Result<RankResult> {
        trace_stage!("rank");

        let matrix = SimilarityMatrixBuilder::new(self.tokenizer.as_ref())
            .with_parallel(self.parallel)
            .build(sentences);
        if !matrix.is_well_formed() {
            return Err(SummarizeError::unexpected(
                "similarity",
                "matrix contains negative or non-finite values",
            ));
        }

        let rank = self.ranker.run(&matrix);
        if !rank.converged {
            tracing::debug!(
                iterations = rank.iterations,
                delta = rank.delta,
                "power iteration stopped at the iteration cap"
            );
        }
        Ok(rank)
    }

    /// Split and score a text
    pub fn rank_text(&self, text: &str) -> Result<RankedSentences> {
        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text to rank"));
        }
        let sentences = self.sentences(text);
        let rank = self.rank(&sentences)?;
        Ok(RankedSentences { sentences, rank })
    }

    /// Summarize, propagating failures.
    ///
    /// Text with `min_sentences` sentences or fewer is returned unchanged
    /// without building a matrix.
    pub fn try_summarize(&self, text: &str, selection: &SelectionConfig) -> Result<String> {
        trace_stage!("summarize");
        selection.validate()?;

        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text to summarize"));
        }

        let selector = SentenceSelector::new(*selection);
        let sentences = self.sentences(text);
        if !selector.needs_ranking(sentences.len()) {
            report(
                "summarize",
                &SummarizeError::insufficient_content(sentences.len(), selection.min_sentences),
            );
            return Ok(text.to_string());
        }

        let rank = self.rank(&sentences)?;
        let selected = selector.select(&sentences, &rank.scores)?;
        Ok(join_sentences(&selected))
    }

    /// Summarize, returning an empty string on failure
    pub fn summarize(&self, text: &str, selection: &SelectionConfig) -> String {
        self.try_summarize(text, selection).unwrap_or_else(|err| {
            report("summarize", &err);
            String::new()
        })
    }
}
