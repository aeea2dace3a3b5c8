//! Sentence graph construction
//!
//! The ranking graph is dense and undirected: every sentence pair is an edge
//! weighted by cosine similarity.

pub mod similarity;
