//! Text rendering of summary results

use crate::types::{FormatType, SummaryResult};

const BULLET: &str = "•";

/// Render a summary result in the requested format
pub fn render(result: &SummaryResult, format: FormatType) -> String {
    match format {
        FormatType::Concise => render_concise(result),
        FormatType::Bullet => render_bullet(result),
        FormatType::Detailed => render_detailed(result),
    }
}

/// The main summary only
pub fn render_concise(result: &SummaryResult) -> String {
    result.main_summary.clone()
}

/// Main summary split on `". "` into bullets, then the key points
pub fn render_bullet(result: &SummaryResult) -> String {
    let mut out = String::from("Summary:\n");
    let bullets: Vec<String> = result
        .main_summary
        .split(". ")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| format!("{} {}", BULLET, piece))
        .collect();
    out.push_str(&bullets.join("\n"));
    out.push_str("\n\n");
    push_key_points(&mut out, &result.key_points);
    out.trim().to_string()
}

/// Main summary, key points and one labelled block per section digest
pub fn render_detailed(result: &SummaryResult) -> String {
    let mut out = result.main_summary.clone();
    out.push_str("\n\n");
    if !result.key_points.is_empty() {
        push_key_points(&mut out, &result.key_points);
        out.push_str("\n\n");
    }
    for (section, digest) in &result.structure {
        if !digest.is_empty() {
            out.push_str(&format!("{}:\n{}\n\n", section.label(), digest));
        }
    }
    out.trim().to_string()
}

fn push_key_points(out: &mut String, key_points: &[String]) {
    if key_points.is_empty() {
        return;
    }
    out.push_str("Key Points:\n");
    let bullets: Vec<String> = key_points
        .iter()
        .map(|point| format!("{} {}", BULLET, point))
        .collect();
    out.push_str(&bullets.join("\n"));
}
