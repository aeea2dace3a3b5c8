//! Benchmarks for focus_textrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use focus_textrank::*;
use std::sync::Arc;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Natural language processing is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. These techniques are used to analyze, understand, and generate human
language in a valuable way. Key applications include sentiment analysis, machine
translation, and text summarization.
"#;

fn tokenizers() -> Vec<Arc<dyn Tokenizer>> {
    vec![
        TokenizerKind::Regex.build(StopwordFilter::english()),
        TokenizerKind::Auto.build(StopwordFilter::english()),
    ]
}

fn benchmark_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for tokenizer in tokenizers() {
        group.bench_function(tokenizer.name(), |b| {
            b.iter(|| {
                tokenizer
                    .split_sentences(black_box(SAMPLE_TEXT))
                    .iter()
                    .map(|s| tokenizer.tokenize_and_stem(&s.text).len())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

fn benchmark_similarity(c: &mut Criterion) {
    let tokenizer = RegexTokenizer::new(StopwordFilter::english());

    // Benchmark parallel vs sequential as the sentence count grows
    let mut group = c.benchmark_group("similarity_matrix");
    for size in [1, 5, 10, 20].iter() {
        let sentences = tokenizer.split_sentences(&SAMPLE_TEXT.repeat(*size));
        group.throughput(Throughput::Elements(sentences.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &sentences, |b, s| {
            b.iter(|| SimilarityMatrixBuilder::new(&tokenizer).build(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &sentences, |b, s| {
            b.iter(|| {
                SimilarityMatrixBuilder::new(&tokenizer)
                    .with_parallel(true)
                    .build(black_box(s))
            })
        });
    }
    group.finish();
}

fn benchmark_power_iteration(c: &mut Criterion) {
    let tokenizer = RegexTokenizer::new(StopwordFilter::english());
    let sentences = tokenizer.split_sentences(&SAMPLE_TEXT.repeat(10));
    let matrix = SimilarityMatrixBuilder::new(&tokenizer).build(&sentences);

    c.bench_function("power_iteration", |b| {
        b.iter(|| PowerIterationRanker::new().run(black_box(&matrix)))
    });
}

fn benchmark_keyphrases(c: &mut Criterion) {
    let extractor = KeyphraseExtractor::default();

    c.bench_function("keyphrases_top5", |b| {
        b.iter(|| extractor.extract(black_box(SAMPLE_TEXT), 5))
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_content");
    for format in [FormatType::Concise, FormatType::Bullet, FormatType::Detailed] {
        let config = SummarizerConfig::default().with_format(format);
        let composer = FocusedSummaryComposer::from_config(config).unwrap();
        group.bench_function(format.as_str(), |b| {
            b.iter(|| composer.summarize_content(black_box(SAMPLE_TEXT)))
        });
    }

    let composer = FocusedSummaryComposer::default();
    group.bench_function("focused_body", |b| {
        b.iter(|| composer.compose(black_box(SAMPLE_TEXT), FocusArea::Section(Section::Body)))
    });
    group.bench_function("study_notes", |b| {
        b.iter(|| composer.study_notes(black_box(SAMPLE_TEXT)))
    });
    group.finish();
}

fn benchmark_stopwords(c: &mut Criterion) {
    let filter = StopwordFilter::new("en");
    let words: Vec<&str> = SAMPLE_TEXT.split_whitespace().collect();

    c.bench_function("stopword_lookup", |b| {
        b.iter(|| words.iter().filter(|w| filter.is_stopword(black_box(w))).count())
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_similarity,
    benchmark_power_iteration,
    benchmark_keyphrases,
    benchmark_full_pipeline,
    benchmark_stopwords,
);
criterion_main!(benches);
