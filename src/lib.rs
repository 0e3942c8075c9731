// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank resumes against a job description by TF-IDF cosine similarity.
//!
//! The core is two pure functions: [`extract_text`] turns a PDF payload into
//! plain text, and [`rank`] scores candidate texts against a query text.
//! Everything else is plumbing around them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ extract/    │────▶│ tokenize.rs  │────▶│  tfidf.rs   │────▶│  scoring/   │
//! │ (PDF, text, │     │ (terms)      │     │ (vocabulary,│     │ (cosine,    │
//! │ page policy)│     │              │     │  weights)   │     │  ranking)   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                                            │
//!        │                    ┌──────────────┐                        │
//!        └────────────────────│   screen/    │◀───────────────────────┘
//!                             │ (files in,   │
//!                             │  report out) │
//!                             └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use resrank::rank;
//!
//! let scores = rank(
//!     "python developer with django experience",
//!     &["expert python and django developer", "java backend engineer"],
//! )
//! .unwrap();
//!
//! assert_eq!(scores.len(), 2);
//! assert!(scores[0] > scores[1]);
//! ```
//!
//! Every call is independent: the vocabulary and idf weights are rebuilt from
//! the query and candidates each time, and identical input gives bit-identical
//! scores.

// Module declarations
pub mod config;
pub mod error;
pub mod extract;
pub mod scoring;
pub mod screen;
pub mod testing;
pub mod tfidf;
mod tokenize;
mod types;
mod utils;

// Re-exports for public API
pub use config::RankerConfig;
pub use error::{RankError, Result};
pub use extract::{extract_text, extract_with_format, DocumentFormat, PAGE_SEPARATOR};
pub use scoring::ranking::{compare_ranked, rank_candidates, sort_ranked};
pub use scoring::{cosine_similarity, rank, rank_with_config};
pub use screen::{screen, JobSource, SourceDocument};
pub use tokenize::tokenize;
pub use types::{Candidate, RankedCandidate, ScreeningReport, SkippedDocument};
pub use utils::collapse_whitespace;
