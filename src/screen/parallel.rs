// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel candidate extraction.
//!
//! Reading and parsing PDFs is the expensive part of a screening request, and
//! each document is independent. Rayon's `par_iter().map().collect()` keeps the
//! output in input order, so the identifier of each candidate stays aligned
//! with its text without any re-sorting.
//!
//! A document that fails to read or open is skipped and reported, never fatal
//! for the rest of the batch.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use super::inputs::{extract_file, SourceDocument};
use crate::error::Result;
use crate::types::{Candidate, SkippedDocument};

/// Extracted candidates in input order, plus the documents that failed.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<SkippedDocument>,
}

fn extract_one(source: &SourceDocument) -> Result<Candidate> {
    let text = extract_file(&source.path)?;
    tracing::debug!(id = %source.id, chars = text.len(), "extracted candidate");
    Ok(Candidate::new(source.id.clone(), text))
}

/// Split per-document results into candidates and skipped documents,
/// preserving order within each.
fn partition(sources: &[SourceDocument], results: Vec<Result<Candidate>>) -> Extraction {
    let mut extraction = Extraction::default();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(candidate) => extraction.candidates.push(candidate),
            Err(err) => {
                tracing::warn!(id = %source.id, error = %err, "skipping document");
                extraction.skipped.push(SkippedDocument {
                    id: source.id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    extraction
}

/// Extract every source in parallel.
#[cfg(feature = "parallel")]
pub fn extract_candidates(sources: &[SourceDocument]) -> Extraction {
    let results: Vec<Result<Candidate>> = sources.par_iter().map(extract_one).collect();
    partition(sources, results)
}

/// Extract every source sequentially.
#[cfg(not(feature = "parallel"))]
pub fn extract_candidates(sources: &[SourceDocument]) -> Extraction {
    let results: Vec<Result<Candidate>> = sources.iter().map(extract_one).collect();
    partition(sources, results)
}

/// Extract every source in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn extract_candidates_with_progress(
    sources: &[SourceDocument],
    progress: &ProgressBar,
) -> Extraction {
    let counter = AtomicUsize::new(0);
    let total = sources.len();

    let results: Vec<Result<Candidate>> = sources
        .par_iter()
        .map(|source| {
            let result = extract_one(source);

            // Workers finish out of order; only inc() keeps the bar monotonic
            progress.inc(1);
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            if count.is_multiple_of(10) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect();

    partition(sources, results)
}
