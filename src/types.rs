//! Core types for focus_textrank
//!
//! This module defines the data structures shared by every stage: sentences,
//! document sections, keyphrases, summary results and configuration.

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::TokenizerKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sentences
// ============================================================================

/// A sentence and its 0-based position in the source sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, whitespace-normalized
    pub text: String,
    /// Index in the original ordered sequence
    pub position: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Join sentence texts with a single space, in the order given
pub fn join_sentences(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Document structure
// ============================================================================

/// One of the three structural sections of a document.
///
/// The declaration order is the reading order, which `Ord` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Introduction,
    Body,
    Conclusion,
}

impl Section {
    /// All sections in reading order
    pub const ALL: [Section; 3] = [Section::Introduction, Section::Body, Section::Conclusion];

    /// Lowercase section name
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Body => "body",
            Section::Conclusion => "conclusion",
        }
    }

    /// Capitalized label used by rendered output
    pub fn label(&self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Body => "Body",
            Section::Conclusion => "Conclusion",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "introduction" => Ok(Section::Introduction),
            "body" => Ok(Section::Body),
            "conclusion" => Ok(Section::Conclusion),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown section '{}'",
                other
            ))),
        }
    }
}

/// Paragraphs grouped into introduction, body and conclusion.
///
/// Paragraphs keep their source order. Any section may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub introduction: Vec<String>,
    pub body: Vec<String>,
    pub conclusion: Vec<String>,
}

impl DocumentStructure {
    /// Paragraphs of one section
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Introduction => &self.introduction,
            Section::Body => &self.body,
            Section::Conclusion => &self.conclusion,
        }
    }

    /// Paragraphs of one section joined with a single space
    pub fn section_text(&self, section: Section) -> String {
        self.section(section).join(" ")
    }

    /// Iterate sections in reading order
    pub fn iter(&self) -> impl Iterator<Item = (Section, &[String])> {
        Section::ALL.into_iter().map(move |s| (s, self.section(s)))
    }

    /// All non-empty sections joined into one text
    pub fn full_text(&self) -> String {
        self.iter()
            .filter(|(_, paragraphs)| !paragraphs.is_empty())
            .map(|(_, paragraphs)| paragraphs.join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total number of paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.introduction.len() + self.body.len() + self.conclusion.len()
    }

    /// Whether every section is empty
    pub fn is_empty(&self) -> bool {
        self.paragraph_count() == 0
    }
}

// ============================================================================
// Keyphrases and results
// ============================================================================

/// A frequency-ranked content term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyphrase {
    /// Lowercased term
    pub term: String,
    /// Occurrences across the whole input
    pub frequency: usize,
    /// Up to 20 characters either side of the first in-sentence occurrence
    pub sample_context: String,
}

/// Structured summary of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub main_summary: String,
    pub key_points: Vec<String>,
    /// Per-section digests, keyed and iterated in reading order
    pub structure: BTreeMap<Section, String>,
}

impl SummaryResult {
    /// An explicitly empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no field carries content
    pub fn is_empty(&self) -> bool {
        self.main_summary.is_empty() && self.key_points.is_empty() && self.structure.is_empty()
    }
}

/// Study aid derived from a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub key_concepts: Vec<String>,
    pub important_points: Vec<String>,
    pub structure: DocumentStructure,
}

// ============================================================================
// Focus and format selectors
// ============================================================================

/// Which part of the document a summary should concentrate on.
///
/// Parsing is lenient: anything that is not a section name means the whole
/// document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum FocusArea {
    #[default]
    FullDocument,
    Section(Section),
}

impl FocusArea {
    /// Parse a user-supplied focus value
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<Section>().ok())
            .map(FocusArea::Section)
            .unwrap_or(FocusArea::FullDocument)
    }

    /// The focused section, if any
    pub fn section(&self) -> Option<Section> {
        match self {
            FocusArea::FullDocument => None,
            FocusArea::Section(s) => Some(*s),
        }
    }
}

impl From<Option<String>> for FocusArea {
    fn from(value: Option<String>) -> Self {
        FocusArea::parse(value.as_deref())
    }
}

impl From<FocusArea> for Option<String> {
    fn from(focus: FocusArea) -> Self {
        focus.section().map(|s| s.as_str().to_string())
    }
}

/// Output rendering mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormatType {
    #[default]
    Concise,
    Bullet,
    Detailed,
}

impl FormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Concise => "concise",
            FormatType::Bullet => "bullet",
            FormatType::Detailed => "detailed",
        }
    }

    /// Parse leniently; unknown values render concisely
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "bullet" | "bullets" => FormatType::Bullet,
            "detailed" => FormatType::Detailed,
            _ => FormatType::Concise,
        }
    }
}

impl From<String> for FormatType {
    fn from(value: String) -> Self {
        FormatType::parse(&value)
    }
}

impl From<FormatType> for String {
    fn from(format: FormatType) -> Self {
        format.as_str().to_string()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// How many sentences a summary keeps.
///
/// Fields missing from serialized input take the full-document preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fraction of sentences to keep, in (0, 1]
    pub ratio: f64,
    /// Lower bound; documents with this many sentences or fewer are returned as-is
    pub min_sentences: usize,
    /// Upper bound
    pub max_sentences: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::full_document()
    }
}

impl SelectionConfig {
    pub fn new(ratio: f64, min_sentences: usize, max_sentences: usize) -> Self {
        Self {
            ratio,
            min_sentences,
            max_sentences,
        }
    }

    /// Whole-document summary
    pub fn full_document() -> Self {
        Self::new(0.3, 3, 7)
    }

    /// Lighter digest of one section inside a full-document summary
    pub fn section_digest() -> Self {
        Self::new(0.5, 1, 7)
    }

    /// Summary of the section a user asked to focus on
    pub fn focused_section() -> Self {
        Self::new(0.7, 2, 7)
    }

    /// Per-section digest in study notes
    pub fn study_digest() -> Self {
        Self::new(0.3, 1, 7)
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(SummarizeError::invalid_config(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }
        if self.min_sentences == 0 {
            return Err(SummarizeError::invalid_config("min_sentences must be >= 1"));
        }
        if self.max_sentences < self.min_sentences {
            return Err(SummarizeError::invalid_config(
                "max_sentences must be >= min_sentences",
            ));
        }
        Ok(())
    }
}

/// Selection fields given in config input
#[derive(Debug, Default, Deserialize)]
struct SelectionOverrides {
    ratio: Option<f64>,
    min_sentences: Option<usize>,
    max_sentences: Option<usize>,
}

impl SelectionOverrides {
    fn apply(self, preset: SelectionConfig) -> SelectionConfig {
        SelectionConfig {
            ratio: self.ratio.unwrap_or(preset.ratio),
            min_sentences: self.min_sentences.unwrap_or(preset.min_sentences),
            max_sentences: self.max_sentences.unwrap_or(preset.max_sentences),
        }
    }
}

fn deserialize_selection<'de, D>(
    deserializer: D,
    preset: SelectionConfig,
) -> std::result::Result<SelectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    SelectionOverrides::deserialize(deserializer).map(|overrides| overrides.apply(preset))
}

fn full_document_selection<'de, D>(deserializer: D) -> std::result::Result<SelectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_selection(deserializer, SelectionConfig::full_document())
}

fn section_digest_selection<'de, D>(deserializer: D) -> std::result::Result<SelectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_selection(deserializer, SelectionConfig::section_digest())
}

fn focused_section_selection<'de, D>(
    deserializer: D,
) -> std::result::Result<SelectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_selection(deserializer, SelectionConfig::focused_section())
}

/// Configuration for the whole summarizer.
///
/// Every field is optional in serialized input. A partial selection object
/// overrides only the fields it names, on top of that selection's preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Tokenizer strategy, resolved once when the summarizer is built
    pub tokenizer: TokenizerKind,
    /// Stopword language from the `stop-words` lists; `None` uses the built-in list
    pub language: Option<String>,
    /// Extra stopwords added on top of the selected list
    pub stopwords: Vec<String>,
    /// Power iteration convergence threshold (L1 distance)
    pub epsilon: f64,
    /// Power iteration cap
    pub max_iterations: usize,
    /// Full-document summary size
    #[serde(deserialize_with = "full_document_selection")]
    pub selection: SelectionConfig,
    /// Per-section digest size
    #[serde(deserialize_with = "section_digest_selection")]
    pub section_selection: SelectionConfig,
    /// Focused-section summary size
    #[serde(deserialize_with = "focused_section_selection")]
    pub focused_selection: SelectionConfig,
    /// Number of keyphrases in `key_points`
    pub top_n_keyphrases: usize,
    pub format: FormatType,
    pub focus_area: FocusArea,
    /// Drop short boilerplate paragraphs before segmentation
    pub extract_main_content: bool,
    /// Compute similarity rows on the rayon pool
    pub parallel: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::Auto,
            language: None,
            stopwords: Vec::new(),
            epsilon: 1e-4,
            max_iterations: 100,
            selection: SelectionConfig::full_document(),
            section_selection: SelectionConfig::section_digest(),
            focused_selection: SelectionConfig::focused_section(),
            top_n_keyphrases: 5,
            format: FormatType::Concise,
            focus_area: FocusArea::FullDocument,
            extract_main_content: true,
            parallel: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_top_n_keyphrases(mut self, top_n: usize) -> Self {
        self.top_n_keyphrases = top_n;
        self
    }

    pub fn with_format(mut self, format: FormatType) -> Self {
        self.format = format;
        self
    }

    pub fn with_focus_area(mut self, focus_area: FocusArea) -> Self {
        self.focus_area = focus_area;
        self
    }

    pub fn with_extract_main_content(mut self, enabled: bool) -> Self {
        self.extract_main_content = enabled;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.selection.validate()?;
        self.section_selection.validate()?;
        self.focused_selection.validate()?;

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SummarizeError::invalid_config(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!("Introduction".parse::<Section>().unwrap(), Section::Introduction);
        assert_eq!(" body ".parse::<Section>().unwrap(), Section::Body);
        assert!("appendix".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_order() {
        let mut sections = vec![Section::Conclusion, Section::Introduction, Section::Body];
        sections.sort();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_focus_area_lenient() {
        assert_eq!(FocusArea::parse(None), FocusArea::FullDocument);
        assert_eq!(FocusArea::parse(Some("nonsense")), FocusArea::FullDocument);
        assert_eq!(
            FocusArea::parse(Some("CONCLUSION")),
            FocusArea::Section(Section::Conclusion)
        );
    }

    #[test]
    fn test_format_type_lenient() {
        assert_eq!(FormatType::parse("bullet"), FormatType::Bullet);
        assert_eq!(FormatType::parse("Detailed"), FormatType::Detailed);
        assert_eq!(FormatType::parse("poem"), FormatType::Concise);
    }

    #[test]
    fn test_full_text_skips_empty_sections() {
        let structure = DocumentStructure {
            introduction: vec!["Intro one.".into(), "Intro two.".into()],
            body: vec![],
            conclusion: vec!["The end.".into()],
        };
        assert_eq!(structure.full_text(), "Intro one. Intro two. The end.");
        assert_eq!(structure.paragraph_count(), 3);
        assert!(!structure.is_empty());
    }

    #[test]
    fn test_selection_validation() {
        assert!(SelectionConfig::full_document().validate().is_ok());
        assert!(SelectionConfig::new(0.0, 1, 3).validate().is_err());
        assert!(SelectionConfig::new(1.5, 1, 3).validate().is_err());
        assert!(SelectionConfig::new(0.5, 0, 3).validate().is_err());
        assert!(SelectionConfig::new(0.5, 4, 3).validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(SummarizerConfig::default().validate().is_ok());
        assert!(SummarizerConfig::default()
            .with_epsilon(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config: SummarizerConfig =
            serde_json::from_str(r#"{"focus_area": "body", "format": "bullet"}"#).unwrap();
        assert_eq!(config.focus_area, FocusArea::Section(Section::Body));
        assert_eq!(config.format, FormatType::Bullet);
        assert_eq!(config.selection, SelectionConfig::full_document());
        assert_eq!(config.max_iterations, 100);

        let config: SummarizerConfig = serde_json::from_str(r#"{"focus_area": null}"#).unwrap();
        assert_eq!(config.focus_area, FocusArea::FullDocument);
    }

    #[test]
    fn test_partial_selection_keeps_preset() {
        let config: SummarizerConfig = serde_json::from_str(
            r#"{"selection": {"ratio": 0.5}, "section_selection": {"max_sentences": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.selection, SelectionConfig::new(0.5, 3, 7));
        assert_eq!(config.section_selection, SelectionConfig::new(0.5, 1, 4));
        assert_eq!(config.focused_selection, SelectionConfig::focused_section());

        let config: SummarizerConfig =
            serde_json::from_str(r#"{"focused_selection": {"min_sentences": 3}}"#).unwrap();
        assert_eq!(config.focused_selection, SelectionConfig::new(0.7, 3, 7));

        let selection: SelectionConfig = serde_json::from_str(r#"{"max_sentences": 5}"#).unwrap();
        assert_eq!(selection, SelectionConfig::new(0.3, 3, 5));
    }

    #[test]
    fn test_summary_result_serializes_section_keys() {
        let mut result = SummaryResult::empty();
        assert!(result.is_empty());
        result.structure.insert(Section::Body, "Body digest.".into());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["structure"]["body"], "Body digest.");
    }
}
