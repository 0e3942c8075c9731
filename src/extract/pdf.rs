// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! PDF pages via `lopdf`.
//!
//! Opening the document parses the cross-reference table and page tree; if
//! that fails the payload is unreadable. Text is pulled one page at a time so a
//! page with a broken content stream or an unknown font only loses itself.
//! Scanned pages have no text operators and come back empty.
//!
//! `lopdf` asserts on some malformed structures (a font dictionary without
//! `/Type /Font` trips a `debug_assert!`), so every call into it runs under
//! `catch_unwind`. A panic while opening is an unreadable document; a panic on
//! one page is a failed page.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;

use super::{PageError, PagedDocument};
use crate::error::{RankError, Result};

/// An opened PDF with its page numbers in page order.
pub struct PdfDocument {
    inner: Document,
    /// 1-based page numbers as `lopdf` knows them.
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Open a PDF from memory.
    pub fn load(payload: &[u8]) -> Result<Self> {
        let (inner, page_numbers) = panic::catch_unwind(|| {
            Document::load_mem(payload).map(|doc| {
                // get_pages() is a BTreeMap keyed by page number, so keys come out in order
                let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
                (doc, page_numbers)
            })
        })
        .map_err(|cause| {
            RankError::unreadable(format!("PDF parser panicked: {}", panic_message(&*cause)))
        })?
        .map_err(|e| RankError::unreadable(format!("not a valid PDF: {}", e)))?;

        tracing::trace!(pages = page_numbers.len(), "opened PDF");
        Ok(Self {
            inner,
            page_numbers,
        })
    }
}

impl PagedDocument for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> std::result::Result<String, PageError> {
        let page = index + 1;
        let number = self.page_numbers.get(index).ok_or_else(|| PageError {
            page,
            reason: "page out of range".to_string(),
        })?;
        let number = *number;

        panic::catch_unwind(AssertUnwindSafe(|| self.inner.extract_text(&[number])))
            .map_err(|cause| PageError {
                page,
                reason: format!("text extraction panicked: {}", panic_message(&*cause)),
            })?
            .map_err(|e| PageError {
                page,
                reason: e.to_string(),
            })
    }
}

/// Message carried by a caught panic, if it was a string.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
