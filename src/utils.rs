// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold diacritics so accented and plain spellings compare equal.
///
/// - "résumé" → "resume"
/// - "naïve" → "naive"
/// - "Müller" → "Muller"
///
/// NFD-decomposes the text and drops the combining marks. Case is left alone;
/// the tokenizer lowercases separately.
#[cfg(feature = "unicode-normalization")]
pub fn fold_accents(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without unicode-normalization the text passes through unchanged.
/// `RankerConfig::validate` refuses `strip_accents` in this build.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_accents(value: &str) -> String {
    value.to_string()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
