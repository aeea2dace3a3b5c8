//! Focus-aware summary composition
//!
//! The composer ties the stages together:
//!
//! 1. whitespace cleanup and optional main-content filtering
//! 2. segmentation into introduction, body and conclusion
//! 3. TextRank over the whole document or over one focused section
//! 4. keyphrases for the same scope
//! 5. rendering in the requested format
//!
//! Every stage logs and degrades to empty output instead of failing.

use crate::errors::{report, Result, SummarizeError};
use crate::format::render;
use crate::phrase::keyphrase::KeyphraseExtractor;
use crate::summarizer::content::{clean_whitespace, extract_main_content};
use crate::summarizer::structure::DocumentStructureSegmenter;
use crate::summarizer::textrank::TextRankSummarizer;
use crate::types::{DocumentStructure, FocusArea, Section, SummarizerConfig, SummaryResult};

/// Final structured result of the full pipeline and its rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedSummary {
    pub result: SummaryResult,
    /// `result` rendered in the configured format
    pub rendered: String,
}

/// Builds structured summaries from a configuration
#[derive(Debug, Clone)]
pub struct FocusedSummaryComposer {
    config: SummarizerConfig,
    summarizer: TextRankSummarizer,
    keyphrases: KeyphraseExtractor,
    segmenter: DocumentStructureSegmenter,
}

impl Default for FocusedSummaryComposer {
    fn default() -> Self {
        Self::build(SummarizerConfig::default())
    }
}

impl FocusedSummaryComposer {
    /// Create a composer after validating the configuration
    pub fn from_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SummarizerConfig) -> Self {
        let summarizer = TextRankSummarizer::from_config(&config);
        let keyphrases = KeyphraseExtractor::new(summarizer.tokenizer().clone());
        Self {
            config,
            summarizer,
            keyphrases,
            segmenter: DocumentStructureSegmenter::new(),
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn summarizer(&self) -> &TextRankSummarizer {
        &self.summarizer
    }

    pub fn keyphrase_extractor(&self) -> &KeyphraseExtractor {
        &self.keyphrases
    }

    /// Segment text into sections
    pub fn structure(&self, text: &str) -> DocumentStructure {
        trace_stage!("segment");
        self.segmenter.segment(text)
    }

    /// Structured summary of `text` for a focus area.
    ///
    /// A focused result carries its digest under the section key. A focus on
    /// a section with no paragraphs gives an empty result.
    pub fn compose(&self, text: &str, focus: FocusArea) -> SummaryResult {
        trace_stage!("compose");
        let structure = self.structure(text);

        match focus.section() {
            None => self.compose_full(text, &structure),
            Some(section) => self.compose_section(&structure, section),
        }
    }

    fn compose_full(&self, text: &str, structure: &DocumentStructure) -> SummaryResult {
        let mut result = SummaryResult {
            main_summary: self
                .summarizer
                .summarize(&structure.full_text(), &self.config.selection),
            key_points: self
                .keyphrases
                .extract_terms(text, self.config.top_n_keyphrases),
            ..Default::default()
        };

        for (section, paragraphs) in structure.iter() {
            if paragraphs.is_empty() {
                continue;
            }
            let digest = self
                .summarizer
                .summarize(&paragraphs.join(" "), &self.config.section_selection);
            result.structure.insert(section, digest);
        }

        result
    }

    fn compose_section(&self, structure: &DocumentStructure, section: Section) -> SummaryResult {
        if structure.section(section).is_empty() {
            tracing::debug!(section = %section, "focused section has no paragraphs");
            return SummaryResult::empty();
        }

        let text = structure.section_text(section);
        let mut result = SummaryResult {
            main_summary: self
                .summarizer
                .summarize(&text, &self.config.focused_selection),
            key_points: self
                .keyphrases
                .extract_terms(&text, self.config.top_n_keyphrases),
            ..Default::default()
        };
        result
            .structure
            .insert(section, result.main_summary.clone());
        result
    }

    /// Whitespace cleanup plus main-content filtering when configured
    pub fn prepare_content(&self, text: &str) -> String {
        let cleaned = clean_whitespace(text);
        if self.config.extract_main_content {
            extract_main_content(&cleaned)
        } else {
            cleaned
        }
    }

    /// Full pipeline: cleanup, composition for the configured focus, the
    /// whole-content fallback when the structured summary is empty, and
    /// rendering
    pub fn try_compose_content(&self, text: &str) -> Result<ComposedSummary> {
        trace_stage!("summarize_content");

        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("no text to summarize"));
        }

        let content = self.prepare_content(text);
        let mut result = self.compose(&content, self.config.focus_area);
        if result.main_summary.is_empty() {
            tracing::warn!(
                focus = ?self.config.focus_area,
                "structured summary came back empty, summarizing raw content"
            );
            result.main_summary = self
                .summarizer
                .try_summarize(&content, &self.config.selection)?;
        }

        let rendered = render(&result, self.config.format);
        Ok(ComposedSummary { result, rendered })
    }

    /// Full pipeline rendered, propagating failures
    pub fn try_summarize_content(&self, text: &str) -> Result<String> {
        self.try_compose_content(text).map(|composed| composed.rendered)
    }

    /// Full pipeline, returning an empty string on failure
    pub fn summarize_content(&self, text: &str) -> String {
        self.try_summarize_content(text).unwrap_or_else(|err| {
            report("summarize_content", &err);
            String::new()
        })
    }
}

/// Summarize text with a configuration.
///
/// Invalid configuration and every internal failure yield an empty string.
pub fn summarize_content(text: &str, config: &SummarizerConfig) -> String {
    match FocusedSummaryComposer::from_config(config.clone()) {
        Ok(composer) => composer.summarize_content(text),
        Err(err) => {
            report("config", &err);
            String::new()
        }
    }
}
