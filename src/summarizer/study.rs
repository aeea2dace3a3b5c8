//! Study material and markdown study notes

use crate::summarizer::focused::FocusedSummaryComposer;
use crate::types::{SelectionConfig, StudyMaterial};
use std::fmt::Write;

/// Key concepts listed in study material
pub const STUDY_CONCEPTS: usize = 10;
/// Sentences listed as important points
pub const STUDY_POINTS: usize = 10;

impl FocusedSummaryComposer {
    /// Key concepts, the sentences that mention them most, and the structure.
    ///
    /// Input is cleaned the same way as for summaries, so short boilerplate
    /// paragraphs are dropped only when `extract_main_content` is enabled.
    ///
    /// Sentences are ordered by how many distinct key concepts they contain,
    /// earlier sentences first on ties.
    pub fn study_material(&self, text: &str) -> StudyMaterial {
        trace_stage!("study_material");

        if text.trim().is_empty() {
            return StudyMaterial::default();
        }

        let content = self.prepare_content(text);
        let structure = self.structure(&content);
        let key_concepts = self
            .keyphrase_extractor()
            .extract_terms(&content, STUDY_CONCEPTS);

        let mut scored: Vec<(usize, String)> = self
            .summarizer()
            .sentences(&content)
            .into_iter()
            .map(|sentence| {
                let lower = sentence.text.to_lowercase();
                let hits = key_concepts
                    .iter()
                    .filter(|concept| lower.contains(concept.as_str()))
                    .count();
                (hits, sentence.text)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        StudyMaterial {
            key_concepts,
            important_points: scored
                .into_iter()
                .take(STUDY_POINTS)
                .map(|(_, text)| text)
                .collect(),
            structure,
        }
    }

    /// Markdown study notes with concepts, points and per-section digests
    pub fn study_notes(&self, text: &str) -> String {
        let material = self.study_material(text);
        let digest = SelectionConfig::study_digest();

        let mut notes = String::from("# Study Notes\n\n## Key Concepts\n");
        for concept in &material.key_concepts {
            let _ = writeln!(notes, "- {}", concept);
        }

        notes.push_str("\n## Important Points\n");
        for point in &material.important_points {
            let _ = writeln!(notes, "- {}", point);
        }

        notes.push_str("\n## Document Structure\n");
        for (section, paragraphs) in material.structure.iter() {
            if paragraphs.is_empty() {
                continue;
            }
            let summary = self.summarizer().summarize(&paragraphs.join(" "), &digest);
            let _ = write!(notes, "### {}\n{}\n\n", section.label(), summary);
        }

        notes
    }
}
