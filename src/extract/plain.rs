// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text documents. Form feed (`\x0C`) is the page break, which is what
//! `pdftotext` and most print spoolers emit.

use super::{PageError, PagedDocument};
use crate::error::{RankError, Result};

const FORM_FEED: char = '\x0C';

/// UTF-8 text split into pages at form feeds.
pub struct PlainTextDocument {
    pages: Vec<String>,
}

impl PlainTextDocument {
    /// Decode a payload. Anything that is not UTF-8 is unreadable.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(payload)
            .map_err(|e| RankError::unreadable(format!("not valid UTF-8 text: {}", e)))?;
        Ok(Self {
            pages: text.split(FORM_FEED).map(str::to_string).collect(),
        })
    }
}

impl PagedDocument for PlainTextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> std::result::Result<String, PageError> {
        self.pages.get(index).cloned().ok_or_else(|| PageError {
            page: index + 1,
            reason: "page out of range".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_without_form_feed() {
        let doc = PlainTextDocument::parse(b"just one page").unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page_text(0).unwrap(), "just one page");
    }

    #[test]
    fn test_form_feeds_split_pages() {
        let doc = PlainTextDocument::parse(b"a\x0Cb\x0Cc").unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.page_text(2).unwrap(), "c");
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        assert!(matches!(
            PlainTextDocument::parse(&[0xff, 0xfe, 0x00]),
            Err(RankError::UnreadableDocument { .. })
        ));
    }
}
