// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! The query is document 0 of the combined set, candidates follow in input
//! order. One TF-IDF fit over all of them, then the cosine between row 0 and
//! every other row.
//!
//! # Score bounds
//!
//! TF-IDF weights are never negative, so the cosine of two weight vectors lies
//! in `[0, 1]`. Floating point can land a hair outside (a vector against itself
//! may come out as `1.0000000000000002`), so results are clamped.
//!
//! # Degenerate vectors
//!
//! A document with no recognized terms has the zero vector. Its cosine with
//! anything is defined as `0.0`. An empty query therefore scores every
//! candidate `0.0`.

use crate::config::RankerConfig;
use crate::error::{RankError, Result};
use crate::tfidf::{fit_transform, SparseVector};

/// Cosine of the angle between two term-weight vectors.
///
/// Dot product over the product of magnitudes; `0.0` if either is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(0.0, 1.0)
}

/// Score every candidate against the query with the default configuration.
///
/// Returns one score per candidate, in the same order as `candidates`.
///
/// # Example
///
/// ```
/// let scores = resrank::rank(
///     "python developer with django experience",
///     &["expert python and django developer", "java backend engineer"],
/// )
/// .unwrap();
/// assert!(scores[0] > scores[1]);
/// ```
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Result<Vec<f64>> {
    rank_with_config(query, candidates, &RankerConfig::default())
}

/// Score every candidate against the query.
pub fn rank_with_config<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    config: &RankerConfig,
) -> Result<Vec<f64>> {
    if candidates.is_empty() {
        return Err(RankError::EmptyCandidateSet);
    }
    config.validate()?;

    let documents: Vec<&str> = std::iter::once(query)
        .chain(candidates.iter().map(AsRef::as_ref))
        .collect();
    let matrix = fit_transform(&documents, config);

    let (query_row, candidate_rows) = matrix
        .rows
        .split_first()
        .ok_or(RankError::EmptyCandidateSet)?;

    if query_row.is_zero() {
        tracing::debug!("query has no recognized terms; every candidate scores 0.0");
    }

    let scores: Vec<f64> = candidate_rows
        .iter()
        .map(|row| cosine_similarity(query_row, row))
        .collect();

    tracing::debug!(
        candidates = scores.len(),
        vocabulary = matrix.vocabulary.len(),
        "ranked candidates"
    );

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let a = SparseVector::from_pairs([(0, 1.0)]);
        let zero = SparseVector::default();
        assert_eq!(cosine_similarity(&a, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_of_orthogonal_vectors_is_zero() {
        let a = SparseVector::from_pairs([(0, 1.0)]);
        let b = SparseVector::from_pairs([(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        let a = SparseVector::from_pairs([(0, 1.0), (1, 2.0)]);
        let b = SparseVector::from_pairs([(0, 10.0), (1, 20.0)]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_rejects_empty_candidates() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            rank("rust developer", &empty),
            Err(RankError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn test_rank_empty_query_scores_zero() {
        let scores = rank("", &["rust developer", "go developer"]).unwrap();
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_rank_all_documents_without_terms() {
        let scores = rank("!!", &["", "?"]).unwrap();
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_rank_rejects_invalid_config() {
        let config = RankerConfig {
            min_token_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            rank_with_config("rust", &["rust"], &config),
            Err(RankError::Config(_))
        ));
    }

    #[test]
    fn test_rank_accepts_owned_strings() {
        let candidates = vec!["rust".to_string(), "java".to_string()];
        let scores = rank("rust", &candidates).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores[0] > scores[1]);
    }
}
