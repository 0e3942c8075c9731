// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** - descending, higher wins
//! 2. **Position** - ascending, so equal scores keep their input order
//!
//! The position tiebreaker makes the order total, which is the same thing a
//! stable sort on score alone would give for input-ordered data, but it stays
//! correct even if the slice was shuffled before sorting.

use std::cmp::Ordering;

use crate::config::RankerConfig;
use crate::error::Result;
use crate::scoring::rank_with_config;
use crate::types::{Candidate, RankedCandidate};

/// Compare two ranked candidates for display order.
pub fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort best-first; equal scores keep input order.
pub fn sort_ranked(ranked: &mut [RankedCandidate]) {
    ranked.sort_by(compare_ranked);
}

/// Score candidates against the query and return them best-first.
pub fn rank_candidates(
    query: &str,
    candidates: &[Candidate],
    config: &RankerConfig,
) -> Result<Vec<RankedCandidate>> {
    let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
    let scores = rank_with_config(query, &texts, config)?;

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(position, (candidate, score))| RankedCandidate {
            id: candidate.id.clone(),
            score,
            position,
        })
        .collect();
    sort_ranked(&mut ranked);

    Ok(ranked)
}
