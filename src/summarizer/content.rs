//! Main-content filtering and whitespace cleanup

use crate::summarizer::structure::split_paragraphs;
use regex::Regex;
use std::sync::LazyLock;

/// Paragraphs shorter than this share of the mean length are dropped
pub const MIN_LENGTH_SHARE: f64 = 0.7;

static INLINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\f\v\r]+").expect("static regex is valid"));

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex is valid"));

/// Keep paragraphs of at least 70% of the mean paragraph length.
///
/// Short paragraphs are usually headers, captions or navigation. When
/// nothing survives, or there are no paragraphs, the input comes back as-is.
pub fn extract_main_content(text: &str) -> String {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return text.to_string();
    }

    let lengths: Vec<usize> = paragraphs.iter().map(|p| p.chars().count()).collect();
    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let threshold = mean * MIN_LENGTH_SHARE;

    let kept: Vec<&str> = paragraphs
        .iter()
        .zip(&lengths)
        .filter(|(_, &len)| len as f64 >= threshold)
        .map(|(p, _)| p.as_str())
        .collect();

    if kept.is_empty() {
        return text.to_string();
    }

    tracing::debug!(
        paragraphs = paragraphs.len(),
        kept = kept.len(),
        "extracted main content"
    );
    kept.join("\n\n")
}

/// Collapse runs of spaces and excess blank lines, keeping paragraph breaks
pub fn clean_whitespace(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| INLINE_SPACE.replace_all(line, " ").trim().to_string())
        .collect();
    EXTRA_BLANK_LINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}
