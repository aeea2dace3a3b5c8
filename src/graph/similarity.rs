//! Sentence similarity matrix
//!
//! Each sentence becomes a term-frequency vector over its stemmed content
//! tokens. Cosine similarity over a pair's shared vocabulary gives the edge
//! weight between the two sentences in the ranking graph.
//!
//! # Scaling
//!
//! Construction is O(N²·V) for N sentences of at most V distinct terms. That
//! is fine for document-scale input (tens to low hundreds of sentences) and
//! is the limit of this approach; a corpus-sized input should be split first.

use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;
use rayon::prelude::*;

/// Sparse term-frequency vector, sorted by term
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    terms: Vec<(String, f64)>,
    norm: f64,
}

impl TermVector {
    /// Count tokens into a vector
    pub fn from_tokens(mut tokens: Vec<String>) -> Self {
        tokens.sort_unstable();

        let mut terms: Vec<(String, f64)> = Vec::new();
        for token in tokens {
            match terms.last_mut() {
                Some((term, count)) if *term == token => *count += 1.0,
                _ => terms.push((token, 1.0)),
            }
        }

        let norm = terms.iter().map(|(_, c)| c * c).sum::<f64>().sqrt();
        Self { terms, norm }
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Cosine similarity; 0 when either vector has no terms
    ///
    /// Terms outside the intersection contribute only to the norms, so the
    /// dot product is a merge over the two sorted term lists.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }

        let mut dot = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (a, ca) = &self.terms[i];
            let (b, cb) = &other.terms[j];
            match a.cmp(b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += ca * cb;
                    i += 1;
                    j += 1;
                }
            }
        }

        dot / (self.norm * other.norm)
    }
}

/// Dense N×N similarity matrix with a zero diagonal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major values
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Build from row vectors. Returns `None` unless the rows are square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set both (i, j) and (j, i); diagonal writes are ignored
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        if i == j {
            return;
        }
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size.max(1)).take(self.size)
    }

    /// Whether every entry is finite and non-negative
    pub fn is_well_formed(&self) -> bool {
        self.values.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Largest |m[i][j] - m[j][i]|
    pub fn max_asymmetry(&self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                max = max.max((self.get(i, j) - self.get(j, i)).abs());
            }
        }
        max
    }
}

/// Builds a [`SimilarityMatrix`] from sentences
#[derive(Debug, Clone, Copy)]
pub struct SimilarityMatrixBuilder<'a> {
    tokenizer: &'a dyn Tokenizer,
    parallel: bool,
}

impl<'a> SimilarityMatrixBuilder<'a> {
    pub fn new(tokenizer: &'a dyn Tokenizer) -> Self {
        Self {
            tokenizer,
            parallel: false,
        }
    }

    /// Compute rows on the rayon pool. Output is identical to the
    /// sequential build because every cell is computed independently.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Term vector of every sentence, in order
    pub fn term_vectors(&self, sentences: &[Sentence]) -> Vec<TermVector> {
        let vectorize = |s: &Sentence| TermVector::from_tokens(self.tokenizer.tokenize_and_stem(&s.text));
        if self.parallel {
            sentences.par_iter().map(vectorize).collect()
        } else {
            sentences.iter().map(vectorize).collect()
        }
    }

    /// Build the matrix. Each unordered pair is computed once and mirrored.
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let vectors = self.term_vectors(sentences);
        let n = vectors.len();

        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        };
        let upper: Vec<Vec<f64>> = if self.parallel {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut matrix = SimilarityMatrix::zeros(n);
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                matrix.set_symmetric(i, i + 1 + offset, value);
            }
        }
        matrix
    }
}
