// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Scores must be finite, inside [0, 1], one per candidate, and identical
//! across repeated calls.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resrank::{rank, RankError};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Cap sizes so each run stays fast
    let query: String = input.query.chars().take(500).collect();
    let candidates: Vec<String> = input
        .candidates
        .into_iter()
        .take(32)
        .map(|c| c.chars().take(2000).collect())
        .collect();

    let first = match rank(&query, &candidates) {
        Ok(scores) => scores,
        Err(RankError::EmptyCandidateSet) => {
            assert!(candidates.is_empty(), "EmptyCandidateSet with candidates present");
            return;
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    };

    assert_eq!(first.len(), candidates.len(), "score count mismatch");
    for score in &first {
        assert!(score.is_finite(), "score {} is not finite", score);
        assert!((0.0..=1.0).contains(score), "score {} out of bounds", score);
    }

    let second = rank(&query, &candidates).unwrap();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.to_bits(), b.to_bits(), "score changed between runs");
    }
});
