//! Extractive summarization
//!
//! - [`textrank`]: sentence ranking and selection for one text
//! - [`structure`]: introduction / body / conclusion segmentation
//! - [`focused`]: structured, focus-aware composition and rendering
//! - [`study`]: study material and notes built on the composer

pub mod content;
pub mod focused;
pub mod selector;
pub mod structure;
pub mod study;
pub mod textrank;
