//! JSON interface for batch processing
//!
//! Documents arrive as `{"text": ..., "config": {...}}` with every config
//! field optional. Batches are summarized on the rayon pool with the GIL
//! released.

use crate::errors::{report, Result};
use crate::summarizer::focused::{ComposedSummary, FocusedSummaryComposer};
use crate::types::{SummarizerConfig, SummaryResult};
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub text: String,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

/// Output for one document
#[derive(Debug, Clone, Default, Serialize)]
pub struct JsonResult {
    /// Rendered in the configured format
    pub summary: String,
    pub result: SummaryResult,
    /// Set when the config was rejected or the pipeline failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summarize one parsed document.
///
/// Runs the same pipeline as `summarize_content`, so `summary` always equals
/// what that function returns for the same text and config. Empty input gives
/// an empty result without an error.
pub fn summarize_document(doc: &JsonDocument) -> JsonResult {
    match try_summarize_document(doc) {
        Ok(ComposedSummary { result, rendered }) => JsonResult {
            summary: rendered,
            result,
            error: None,
        },
        Err(err) => {
            report("json", &err);
            JsonResult {
                error: (!err.is_recoverable()).then(|| err.to_string()),
                ..Default::default()
            }
        }
    }
}

fn try_summarize_document(doc: &JsonDocument) -> Result<ComposedSummary> {
    let config = doc.config.clone().unwrap_or_default();
    FocusedSummaryComposer::from_config(config)?.try_compose_content(&doc.text)
}

fn invalid_json(e: serde_json::Error) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(format!("Invalid JSON: {}", e))
}

/// Summarize one document from JSON
///
/// Args:
///     json_input: JSON object with `text` and optional `config`
///
/// Returns:
///     JSON object with `summary` and the structured `result`
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let doc: JsonDocument = serde_json::from_str(json_input).map_err(invalid_json)?;
    let result = py.allow_threads(|| summarize_document(&doc));

    serde_json::to_string(&result)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Summarize many documents from JSON
///
/// Args:
///     json_input: JSON array of documents
///
/// Returns:
///     JSON array of results in input order
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let docs: Vec<JsonDocument> = serde_json::from_str(json_input).map_err(invalid_json)?;

    let results: Vec<JsonResult> =
        py.allow_threads(|| docs.par_iter().map(summarize_document).collect());

    serde_json::to_string(&results)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
