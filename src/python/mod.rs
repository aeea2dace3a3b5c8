//! Python bindings via PyO3
//!
//! This module provides the Python interface for focus_textrank.

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface classes
    m.add_class::<native::PyKeyphrase>()?;
    m.add_class::<native::PySummaryResult>()?;
    m.add_class::<native::PyDocumentStructure>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;
    m.add_function(wrap_pyfunction!(native::summarize_structured, m)?)?;
    m.add_function(wrap_pyfunction!(native::extract_keyphrases, m)?)?;
    m.add_function(wrap_pyfunction!(native::document_structure, m)?)?;
    m.add_function(wrap_pyfunction!(native::study_notes, m)?)?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::summarize_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::summarize_batch_from_json, m)?)?;

    Ok(())
}
