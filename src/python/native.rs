//! Native Python interface
//!
//! Python classes and functions over plain strings. Configuration is
//! validated when a `Summarizer` is constructed; summarizing never raises.

use crate::format::render;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::TokenizerKind;
use crate::summarizer::focused::FocusedSummaryComposer;
use crate::types::{
    DocumentStructure, FocusArea, FormatType, Keyphrase, SelectionConfig, SummarizerConfig,
    SummaryResult,
};
use pyo3::prelude::*;
use std::collections::HashMap;
use std::sync::LazyLock;

static DEFAULT_COMPOSER: LazyLock<FocusedSummaryComposer> =
    LazyLock::new(FocusedSummaryComposer::default);

/// A keyphrase with its frequency and a context sample
#[pyclass(name = "Keyphrase")]
#[derive(Clone)]
pub struct PyKeyphrase {
    #[pyo3(get)]
    pub term: String,
    #[pyo3(get)]
    pub frequency: usize,
    #[pyo3(get)]
    pub sample_context: String,
}

#[pymethods]
impl PyKeyphrase {
    fn __repr__(&self) -> String {
        format!(
            "Keyphrase(term='{}', frequency={})",
            self.term, self.frequency
        )
    }

    fn __str__(&self) -> String {
        self.term.clone()
    }
}

impl From<Keyphrase> for PyKeyphrase {
    fn from(k: Keyphrase) -> Self {
        Self {
            term: k.term,
            frequency: k.frequency,
            sample_context: k.sample_context,
        }
    }
}

/// Structured summary
#[pyclass(name = "SummaryResult")]
#[derive(Clone)]
pub struct PySummaryResult {
    inner: SummaryResult,
}

#[pymethods]
impl PySummaryResult {
    #[getter]
    fn main_summary(&self) -> String {
        self.inner.main_summary.clone()
    }

    #[getter]
    fn key_points(&self) -> Vec<String> {
        self.inner.key_points.clone()
    }

    /// Section digests keyed by lowercase section name
    #[getter]
    fn structure(&self) -> HashMap<String, String> {
        self.inner
            .structure
            .iter()
            .map(|(section, digest)| (section.as_str().to_string(), digest.clone()))
            .collect()
    }

    /// Render in "concise", "bullet" or "detailed" form
    #[pyo3(signature = (format_type = "concise"))]
    fn render(&self, format_type: &str) -> String {
        render(&self.inner, FormatType::parse(format_type))
    }

    fn __repr__(&self) -> String {
        format!(
            "SummaryResult(key_points={}, sections={})",
            self.inner.key_points.len(),
            self.inner.structure.len()
        )
    }

    fn __bool__(&self) -> bool {
        !self.inner.is_empty()
    }
}

impl From<SummaryResult> for PySummaryResult {
    fn from(inner: SummaryResult) -> Self {
        Self { inner }
    }
}

/// Paragraphs grouped by section
#[pyclass(name = "DocumentStructure")]
#[derive(Clone)]
pub struct PyDocumentStructure {
    #[pyo3(get)]
    pub introduction: Vec<String>,
    #[pyo3(get)]
    pub body: Vec<String>,
    #[pyo3(get)]
    pub conclusion: Vec<String>,
}

#[pymethods]
impl PyDocumentStructure {
    fn __repr__(&self) -> String {
        format!(
            "DocumentStructure(introduction={}, body={}, conclusion={})",
            self.introduction.len(),
            self.body.len(),
            self.conclusion.len()
        )
    }
}

impl From<DocumentStructure> for PyDocumentStructure {
    fn from(s: DocumentStructure) -> Self {
        Self {
            introduction: s.introduction,
            body: s.body,
            conclusion: s.conclusion,
        }
    }
}

/// Configured summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    composer: FocusedSummaryComposer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (
        ratio=0.3,
        min_sentences=3,
        max_sentences=7,
        top_n=5,
        format_type="concise",
        focus_area=None,
        tokenizer="auto",
        language=None,
        stopwords=None,
        extract_main_content=true
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        ratio: f64,
        min_sentences: usize,
        max_sentences: usize,
        top_n: usize,
        format_type: &str,
        focus_area: Option<&str>,
        tokenizer: &str,
        language: Option<String>,
        stopwords: Option<Vec<String>>,
        extract_main_content: bool,
    ) -> PyResult<Self> {
        let tokenizer: TokenizerKind = tokenizer
            .parse()
            .map_err(|e: crate::errors::SummarizeError| {
                pyo3::exceptions::PyValueError::new_err(e.to_string())
            })?;

        let config = SummarizerConfig {
            tokenizer,
            language,
            stopwords: stopwords.unwrap_or_default(),
            selection: SelectionConfig::new(ratio, min_sentences, max_sentences),
            top_n_keyphrases: top_n,
            format: FormatType::parse(format_type),
            focus_area: FocusArea::parse(focus_area),
            extract_main_content,
            ..Default::default()
        };

        let composer = FocusedSummaryComposer::from_config(config)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self { composer })
    }

    /// Rendered summary using the configured format and focus
    #[pyo3(signature = (text))]
    fn summarize(&self, py: Python<'_>, text: &str) -> String {
        py.allow_threads(|| self.composer.summarize_content(text))
    }

    /// Structured summary; `focus_area` overrides the configured focus
    #[pyo3(signature = (text, focus_area=None))]
    fn summarize_structured(
        &self,
        py: Python<'_>,
        text: &str,
        focus_area: Option<&str>,
    ) -> PySummaryResult {
        let focus = match focus_area {
            Some(value) => FocusArea::parse(Some(value)),
            None => self.composer.config().focus_area,
        };
        py.allow_threads(|| self.composer.compose(text, focus)).into()
    }

    #[pyo3(signature = (text, top_n=None))]
    fn extract_keyphrases(&self, text: &str, top_n: Option<usize>) -> Vec<PyKeyphrase> {
        let top_n = top_n.unwrap_or(self.composer.config().top_n_keyphrases);
        self.composer
            .keyphrase_extractor()
            .extract(text, top_n)
            .into_iter()
            .map(PyKeyphrase::from)
            .collect()
    }

    #[pyo3(signature = (text))]
    fn study_notes(&self, py: Python<'_>, text: &str) -> String {
        py.allow_threads(|| self.composer.study_notes(text))
    }

    fn __repr__(&self) -> String {
        let config = self.composer.config();
        format!(
            "Summarizer(ratio={}, min_sentences={}, max_sentences={}, format_type='{}', tokenizer='{}')",
            config.selection.ratio,
            config.selection.min_sentences,
            config.selection.max_sentences,
            config.format.as_str(),
            self.composer.summarizer().tokenizer().name()
        )
    }
}

/// Summarize text with default settings
#[pyfunction]
#[pyo3(signature = (text, format_type = "concise", focus_area = None))]
pub fn summarize(py: Python<'_>, text: &str, format_type: &str, focus_area: Option<&str>) -> String {
    let config = SummarizerConfig::default()
        .with_format(FormatType::parse(format_type))
        .with_focus_area(FocusArea::parse(focus_area));
    py.allow_threads(|| crate::summarizer::focused::summarize_content(text, &config))
}

/// Structured summary with default settings
#[pyfunction]
#[pyo3(signature = (text, focus_area = None))]
pub fn summarize_structured(
    py: Python<'_>,
    text: &str,
    focus_area: Option<&str>,
) -> PySummaryResult {
    let focus = FocusArea::parse(focus_area);
    py.allow_threads(|| DEFAULT_COMPOSER.compose(text, focus)).into()
}

/// Most frequent content terms
#[pyfunction]
#[pyo3(signature = (text, top_n = 5))]
pub fn extract_keyphrases(text: &str, top_n: usize) -> Vec<PyKeyphrase> {
    DEFAULT_COMPOSER
        .keyphrase_extractor()
        .extract(text, top_n)
        .into_iter()
        .map(PyKeyphrase::from)
        .collect()
}

/// Paragraph segmentation into introduction, body and conclusion
#[pyfunction]
#[pyo3(signature = (text))]
pub fn document_structure(text: &str) -> PyDocumentStructure {
    DEFAULT_COMPOSER.structure(text).into()
}

/// Markdown study notes
#[pyfunction]
#[pyo3(signature = (text))]
pub fn study_notes(py: Python<'_>, text: &str) -> String {
    py.allow_threads(|| DEFAULT_COMPOSER.study_notes(text))
}

/// Get a stopword list; `None` gives the built-in English list.
#[pyfunction]
#[pyo3(signature = (language = None))]
pub fn get_stopwords(language: Option<&str>) -> Vec<String> {
    StopwordFilter::built_in_list(language)
}
