// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The screening pipeline: files in, ranked report out.
//!
//! ```text
//! paths ──collect_inputs──▶ sources ──extract_candidates──▶ candidates ──rank──▶ report
//!                                            │
//!                                            └──▶ skipped (unreadable, I/O)
//! ```
//!
//! This is the collaborator around the core: it decides that unreadable
//! documents are skipped and reported, and it owns the final best-first sort.

pub mod inputs;
pub mod parallel;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::RankerConfig;
use crate::error::{RankError, Result};
use crate::scoring::ranking::rank_candidates;
use crate::types::ScreeningReport;

pub use inputs::{collect_inputs, extract_file, load_query, JobSource, SourceDocument};
pub use parallel::{extract_candidates, Extraction};

#[cfg(feature = "parallel")]
pub use parallel::extract_candidates_with_progress;

/// Create the progress style for the extraction bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Rank an extraction against the query.
///
/// Fails with `EmptyCandidateSet` when nothing survived extraction.
pub fn rank_extraction(
    query: &str,
    extraction: Extraction,
    config: &RankerConfig,
) -> Result<ScreeningReport> {
    if extraction.candidates.is_empty() {
        return Err(RankError::EmptyCandidateSet);
    }

    let ranked = rank_candidates(query, &extraction.candidates, config)?;
    tracing::info!(
        ranked = ranked.len(),
        skipped = extraction.skipped.len(),
        "screening complete"
    );

    Ok(ScreeningReport {
        ranked,
        skipped: extraction.skipped,
    })
}

/// Extract every source and rank the readable ones against the query.
pub fn screen(
    query: &str,
    sources: &[SourceDocument],
    config: &RankerConfig,
) -> Result<ScreeningReport> {
    rank_extraction(query, extract_candidates(sources), config)
}

/// Same as [`screen`], drawing an extraction progress bar on stderr.
#[cfg(feature = "parallel")]
pub fn screen_with_progress(
    query: &str,
    sources: &[SourceDocument],
    config: &RankerConfig,
) -> Result<ScreeningReport> {
    let progress = ProgressBar::new(sources.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Extracting");
    progress.set_message("resumes...");

    let extraction = extract_candidates_with_progress(sources, &progress);
    progress.finish_and_clear();

    rank_extraction(query, extraction, config)
}

/// Without the parallel feature there is no progress bar.
#[cfg(not(feature = "parallel"))]
pub fn screen_with_progress(
    query: &str,
    sources: &[SourceDocument],
    config: &RankerConfig,
) -> Result<ScreeningReport> {
    screen(query, sources, config)
}
