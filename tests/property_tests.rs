//! Property-based tests using proptest

use focus_textrank::*;
use proptest::prelude::*;
use std::sync::Arc;

const VOCAB: &[&str] = &[
    "graph", "ranking", "sentence", "summary", "vector", "matrix", "power", "iteration",
    "cosine", "stemmer", "token", "paragraph", "section", "keyword", "document", "the", "and",
    "with", "from", "river", "mountain", "forest", "ocean", "desert",
];

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 2..9).prop_map(|words| {
        let mut text = words.join(" ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text.push('.');
        text
    })
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence_strategy(), 1..25)
}

fn regex_summarizer() -> TextRankSummarizer {
    TextRankSummarizer::new(Arc::new(RegexTokenizer::new(StopwordFilter::english())))
}

fn symmetric_matrix(n: usize, cells: &[f64]) -> SimilarityMatrix {
    let mut matrix = SimilarityMatrix::zeros(n);
    let mut next = cells.iter().cycle();
    for i in 0..n {
        for j in (i + 1)..n {
            matrix.set_symmetric(i, j, *next.next().unwrap_or(&0.0));
        }
    }
    matrix
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_selection_respects_bounds(
        n in 1usize..60,
        ratio in 0.01f64..=1.0,
        min in 1usize..6,
        extra in 0usize..6,
    ) {
        let config = SelectionConfig::new(ratio, min, min + extra);
        let selector = SentenceSelector::new(config);
        let target = selector.target_count(n);

        prop_assert!(target <= n);
        if n > min {
            prop_assert!(target >= min);
            prop_assert!(target <= min + extra);
        }
    }

    #[test]
    fn test_selected_positions_increase(
        scores in prop::collection::vec(0.0f64..1.0, 1..40),
    ) {
        let sentences: Vec<Sentence> = (0..scores.len())
            .map(|i| Sentence::new(format!("Sentence {}.", i), i))
            .collect();
        let selected = SentenceSelector::new(SelectionConfig::full_document())
            .select(&sentences, &scores)
            .unwrap();

        prop_assert!(selected.windows(2).all(|w| w[0].position < w[1].position));
    }

    #[test]
    fn test_summary_is_subsequence(doc in document_strategy()) {
        let summarizer = regex_summarizer();
        let text = doc.join(" ");
        let original = summarizer.sentences(&text);
        let summary = summarizer.summarize(&text, &SelectionConfig::full_document());

        if original.len() <= 3 {
            prop_assert_eq!(summary, text);
        } else {
            let picked = summarizer.sentences(&summary);
            prop_assert!(picked.len() >= 3 && picked.len() <= 7);

            let mut cursor = original.iter();
            for sentence in &picked {
                prop_assert!(cursor.any(|o| o.text == sentence.text));
            }
        }
    }

    #[test]
    fn test_similarity_symmetric_zero_diagonal(doc in document_strategy()) {
        let tokenizer = RegexTokenizer::new(StopwordFilter::english());
        let sentences: Vec<Sentence> = doc
            .iter()
            .enumerate()
            .map(|(i, s)| Sentence::new(s.clone(), i))
            .collect();
        let matrix = SimilarityMatrixBuilder::new(&tokenizer).build(&sentences);

        prop_assert!(matrix.is_well_formed());
        for i in 0..matrix.len() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.len() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                prop_assert!(matrix.get(i, j) <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_rank_scores_sum_to_one(
        n in 2usize..15,
        cells in prop::collection::vec(0.0f64..1.0, 1..64),
    ) {
        let matrix = symmetric_matrix(n, &cells);
        let result = PowerIterationRanker::new().run(&matrix);

        prop_assert_eq!(result.scores.len(), n);
        prop_assert!(result.scores.iter().all(|s| *s >= 0.0 && s.is_finite()));
        let sum = result.total();
        prop_assert!((sum - 1.0).abs() < 1e-4, "Scores sum to {} instead of 1", sum);
        prop_assert!(result.iterations <= 100);
    }

    #[test]
    fn test_keyphrases_distinct_and_deterministic(
        doc in document_strategy(),
        top_n in 1usize..10,
    ) {
        let extractor = KeyphraseExtractor::new(Arc::new(RegexTokenizer::new(
            StopwordFilter::english(),
        )));
        let text = doc.join(" ");
        let first = extractor.extract(&text, top_n);
        let second = extractor.extract(&text, top_n);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= top_n);
        prop_assert!(first.windows(2).all(|w| w[0].frequency >= w[1].frequency));

        let mut terms: Vec<&str> = first.iter().map(|k| k.term.as_str()).collect();
        terms.sort();
        terms.dedup();
        prop_assert_eq!(terms.len(), first.len());
    }

    #[test]
    fn test_pipeline_never_panics(text in "\\PC{0,400}") {
        let config = SummarizerConfig::default().with_format(FormatType::Detailed);
        let _ = summarize_content(&text, &config);
        let _ = FocusedSummaryComposer::default().study_notes(&text);
    }

    #[test]
    fn test_segmentation_keeps_every_paragraph(
        paragraphs in prop::collection::vec(sentence_strategy(), 0..12),
    ) {
        let structure = DocumentStructureSegmenter::new().segment(&paragraphs.join("\n\n"));
        prop_assert_eq!(structure.paragraph_count(), paragraphs.len());

        let mut all = structure.introduction.clone();
        all.extend(structure.body.iter().cloned());
        all.extend(structure.conclusion.iter().cloned());
        prop_assert_eq!(all, paragraphs);
    }
}
