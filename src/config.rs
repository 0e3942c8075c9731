// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vectorizer configuration.
//!
//! The defaults reproduce the classic TF-IDF setup: raw term counts, smoothed
//! idf, L2-normalized vectors, tokens of two or more word characters, no
//! accent folding. A config file only needs the fields it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Knobs for tokenization and term weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankerConfig {
    /// Minimum number of characters a token needs to enter the vocabulary.
    pub min_token_chars: usize,
    /// Fold diacritics before tokenizing ("résumé" and "resume" become one term).
    pub strip_accents: bool,
    /// Add one to document frequencies, as if an extra document contained
    /// every term once. Prevents zero divisions.
    pub smooth_idf: bool,
    /// Replace raw term frequency with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 2,
            strip_accents: false,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

impl RankerConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| RankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RankerConfig = serde_json::from_str(&raw)
            .map_err(|e| RankError::Config(format!("invalid config {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make every token disappear or
    /// silently do nothing.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_chars == 0 {
            return Err(RankError::Config(
                "minTokenChars must be greater than 0".into(),
            ));
        }
        #[cfg(not(feature = "unicode-normalization"))]
        if self.strip_accents {
            return Err(RankError::Config(
                "stripAccents requires the unicode-normalization feature".into(),
            ));
        }
        Ok(())
    }
}
