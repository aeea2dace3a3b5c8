//! Natural Language Processing components
//!
//! This module provides sentence splitting, tokenization, stemming and
//! stopword filtering.

pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
