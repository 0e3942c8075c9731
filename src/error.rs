// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for extraction and ranking.
//!
//! A document with no usable vocabulary is not an error: its vector is zero
//! and it scores `0.0` against everything. Only structurally broken input,
//! I/O failures, and misuse of the ranker surface here.

use std::path::PathBuf;

/// Errors that can occur while extracting or ranking documents.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// The payload could not be opened as a paginated document at all.
    #[error("unreadable document: {reason}")]
    UnreadableDocument { reason: String },

    /// Ranking was invoked with zero candidates.
    #[error("no candidates to rank")]
    EmptyCandidateSet,

    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid ranker configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl RankError {
    pub(crate) fn unreadable(reason: impl Into<String>) -> Self {
        RankError::UnreadableDocument {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for resrank results.
pub type Result<T> = std::result::Result<T, RankError>;
