// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for ranking requests.
//!
//! All of these are plain values created once per request. Nothing here is
//! mutated after construction and nothing outlives the request.

use serde::{Deserialize, Serialize};

/// One candidate document after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Caller-supplied label, usually the file name. Not required to be unique.
    pub id: String,
    /// Extracted plain text.
    pub text: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A candidate with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    /// Cosine similarity against the query, in `[0.0, 1.0]`.
    pub score: f64,
    /// Index of the candidate in the original input order.
    pub position: usize,
}

/// A document that could not be turned into a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: String,
}

/// Outcome of one screening request: ranked candidates, best first, plus
/// every document that was skipped and why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub ranked: Vec<RankedCandidate>,
    #[serde(default)]
    pub skipped: Vec<SkippedDocument>,
}

impl ScreeningReport {
    /// Highest-scoring candidate, if any.
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.ranked.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = ScreeningReport {
            ranked: vec![RankedCandidate {
                id: "alice.pdf".to_string(),
                score: 0.5,
                position: 1,
            }],
            skipped: vec![SkippedDocument {
                id: "broken.pdf".to_string(),
                reason: "unreadable document: bad header".to_string(),
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"ranked":[{"id":"alice.pdf","score":0.5,"position":1}],"skipped":[{"id":"broken.pdf","reason":"unreadable document: bad header"}]}"#
        );
    }

    #[test]
    fn test_report_without_skipped_parses() {
        let report: ScreeningReport =
            serde_json::from_str(r#"{"ranked":[{"id":"a","score":1.0,"position":0}]}"#).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.best().map(|r| r.id.as_str()), Some("a"));
    }
}
