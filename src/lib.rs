//! # focus_textrank
//!
//! Extractive, focus-aware document summarization built on TextRank.
//!
//! Sentences become nodes of a dense graph weighted by the cosine similarity
//! of their stemmed content terms. Power iteration ranks them and the best
//! ones are returned in reading order. On top of that the crate segments
//! documents into introduction, body and conclusion, summarizes the whole
//! document or one section, extracts frequency-ranked keyphrases and renders
//! the result as concise text, bullets or a detailed report.
//!
//! ## Features
//!
//! - **`linguistic`** (default): UAX #29 segmentation and a Porter stemmer.
//!   Without it a regex tokenizer is used.
//! - **`python`**: PyO3 bindings.
//!
//! ```
//! use focus_textrank::{summarize_content, FormatType, SummarizerConfig};
//!
//! let text = "Rust is fast. Rust is safe. Cargo builds Rust code. \
//!             Crates share Rust code. The borrow checker keeps Rust safe.";
//! let config = SummarizerConfig::default().with_format(FormatType::Bullet);
//! let summary = summarize_content(text, &config);
//! assert!(summary.starts_with("Summary:"));
//! ```

/// Enter a tracing span for one summarization stage until the end of scope
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

pub mod errors;
pub mod format;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    DocumentStructure, FocusArea, FormatType, Keyphrase, Section, SelectionConfig, Sentence,
    StudyMaterial, SummarizerConfig, SummaryResult,
};

// Re-export main functionality
pub use format::render;
pub use graph::similarity::{SimilarityMatrix, SimilarityMatrixBuilder};
pub use nlp::{
    stopwords::StopwordFilter,
    tokenizer::{RegexTokenizer, Tokenizer, TokenizerKind},
};
pub use pagerank::{power::PowerIterationRanker, RankResult};
pub use phrase::keyphrase::KeyphraseExtractor;
pub use summarizer::content::{clean_whitespace, extract_main_content};
pub use summarizer::focused::{summarize_content, ComposedSummary, FocusedSummaryComposer};
pub use summarizer::selector::SentenceSelector;
pub use summarizer::structure::DocumentStructureSegmenter;
pub use summarizer::textrank::TextRankSummarizer;

#[cfg(feature = "linguistic")]
pub use nlp::tokenizer::LinguisticTokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
