// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning text into terms.
//!
//! A term is a maximal run of word characters (letters, digits, underscore),
//! lowercased, at least `min_token_chars` characters long. Everything else is
//! a separator. There is no stop-word list: words that appear in nearly every
//! document ("and", "with", "experience") are already discounted by idf.
//!
//! ```text
//! "Senior C++/Rust dev, 5+ yrs"  →  ["senior", "rust", "dev", "yrs"]
//! ```
//!
//! "C" and "5" vanish because they are single characters. That is the
//! classic behavior and the price of not maintaining a hand-written
//! exception list.

use crate::config::RankerConfig;
use crate::utils::fold_accents;

/// Word character test: letters and digits in any script, plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into terms according to the config.
///
/// Terms come back in reading order with repeats preserved; the vectorizer
/// does the counting.
///
/// The config is not validated here. `strip_accents` only folds when the
/// `unicode-normalization` feature is enabled; without it the text passes
/// through unchanged. [`crate::rank_with_config`] rejects that combination via
/// [`RankerConfig::validate`].
pub fn tokenize(text: &str, config: &RankerConfig) -> Vec<String> {
    let prepared = if config.strip_accents {
        fold_accents(text)
    } else {
        text.to_string()
    };
    let lowered = prepared.to_lowercase();

    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty() && token.chars().count() >= config.min_token_chars)
        .map(str::to_string)
        .collect()
}
