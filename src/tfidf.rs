// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectors over a shared vocabulary.
//!
//! Every ranking request builds its own vocabulary from the query and all
//! candidates, then weights each document against it. Nothing is cached between
//! requests: the document set changes every time, and so do the idf values.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = count of t in d                  (or 1 + ln(count) when sublinear)
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1    (smoothed, the default)
//!           = ln(n / df(t)) + 1                (unsmoothed)
//! w(t, d)   = tf(t, d) * idf(t), then the row is scaled to unit L2 length
//! ```
//!
//! The `+ 1` on idf keeps terms that occur in every document from vanishing
//! entirely; they are discounted, not deleted.
//!
//! # Determinism
//!
//! Term ids follow sorted term order, and every vector stores its entries
//! sorted by term id. Sums always run in that order, so the same input gives
//! the same bits on every run.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::RankerConfig;
use crate::tokenize::tokenize;

/// Sorted term list shared by every document in one request.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from tokenized documents. Term ids are assigned in sorted order.
    pub fn from_documents(tokenized: &[Vec<String>]) -> Self {
        let sorted: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();

        let terms: Vec<String> = sorted.into_iter().map(str::to_string).collect();
        let ids = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id))
            .collect();

        Self { terms, ids }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term id for a term, if it occurs anywhere in the document set.
    pub fn id(&self, term: &str) -> Option<usize> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// A term-weight vector storing only non-zero entries, sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(term_id, weight)` pairs. Pairs are sorted and zero
    /// weights dropped; duplicate ids are summed.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for (id, weight) in pairs {
            *merged.entry(id).or_insert(0.0) += weight;
        }
        Self {
            entries: merged.into_iter().filter(|&(_, w)| w != 0.0).collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight of a term, zero when absent.
    pub fn get(&self, term_id: usize) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// True when the document had no recognized terms.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merge-joining the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length. The zero vector stays zero.
    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// The fitted vocabulary, idf weights, and one L2-normalized row per document.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: Vocabulary,
    pub idf: Vec<f64>,
    pub rows: Vec<SparseVector>,
}

/// Inverse document frequency for a term found in `df` of `n` documents.
pub fn inverse_document_frequency(n: usize, df: usize, smooth: bool) -> f64 {
    let (n, df) = (n as f64, df as f64);
    if smooth {
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    } else {
        (n / df).ln() + 1.0
    }
}

/// Term frequency transform.
fn term_frequency(count: usize, sublinear: bool) -> f64 {
    if sublinear {
        1.0 + (count as f64).ln()
    } else {
        count as f64
    }
}

/// Build the vocabulary from `documents` and weight every one of them.
///
/// Row `i` of the result belongs to `documents[i]`.
pub fn fit_transform<S: AsRef<str>>(documents: &[S], config: &RankerConfig) -> TfidfMatrix {
    let tokenized: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| tokenize(doc.as_ref(), config))
        .collect();
    let vocabulary = Vocabulary::from_documents(&tokenized);

    // Per-document term counts, keyed by term id so iteration is ordered
    let counts: Vec<BTreeMap<usize, usize>> = tokenized
        .iter()
        .map(|tokens| {
            let mut counts = BTreeMap::new();
            for token in tokens {
                if let Some(id) = vocabulary.id(token) {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }
            counts
        })
        .collect();

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for doc_counts in &counts {
        for &id in doc_counts.keys() {
            document_frequency[id] += 1;
        }
    }

    let n = documents.len();
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| inverse_document_frequency(n, df, config.smooth_idf))
        .collect();

    let rows = counts
        .iter()
        .map(|doc_counts| {
            let mut row = SparseVector::from_pairs(doc_counts.iter().map(|(&id, &count)| {
                (id, term_frequency(count, config.sublinear_tf) * idf[id])
            }));
            row.normalize();
            row
        })
        .collect();

    tracing::trace!(
        documents = n,
        terms = vocabulary.len(),
        "tf-idf matrix built"
    );

    TfidfMatrix {
        vocabulary,
        idf,
        rows,
    }
}
