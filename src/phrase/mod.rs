//! Keyphrase extraction

pub mod keyphrase;
