// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text extraction from paginated documents.
//!
//! Every format goes through the same page policy:
//!
//! ```text
//! page 1: "  Alice Smith \n"   →  "Alice Smith"
//! page 2: <scanned image>      →  ""            (dropped)
//! page 3: "Rust, Go"           →  "Rust, Go"
//!                                 ─────────────
//!                                 "Alice Smith\nRust, Go"
//! ```
//!
//! Each page is trimmed, pages with no text are dropped, the rest are joined
//! with [`PAGE_SEPARATOR`]. A page that fails to extract counts as empty; one
//! bad page never sinks the document. Only a payload that cannot be opened at
//! all is an error ([`crate::RankError::UnreadableDocument`]).
//!
//! The separator is a newline rather than nothing so that the last word of
//! one page and the first word of the next never fuse into a single term.

mod pdf;
mod plain;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use pdf::PdfDocument;
pub use plain::PlainTextDocument;

/// Separator placed between the texts of consecutive non-empty pages.
pub const PAGE_SEPARATOR: &str = "\n";

/// Why a single page produced no text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page {page}: {reason}")]
pub struct PageError {
    /// 1-based page number.
    pub page: usize,
    pub reason: String,
}

/// A document that can be read one page at a time.
pub trait PagedDocument {
    fn page_count(&self) -> usize;

    /// Raw text of the page at `index` (0-based).
    fn page_text(&self, index: usize) -> std::result::Result<String, PageError>;
}

/// Apply the page policy: trim each page, drop empty or failed pages, join
/// the rest in page order.
pub fn join_pages<D: PagedDocument + ?Sized>(document: &D) -> String {
    let mut pages: Vec<String> = Vec::with_capacity(document.page_count());

    for index in 0..document.page_count() {
        match document.page_text(index) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    tracing::debug!(page = index + 1, "page has no extractable text");
                } else {
                    pages.push(trimmed.to_string());
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "page extraction failed; treating as empty");
            }
        }
    }

    pages.join(PAGE_SEPARATOR).trim().to_string()
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    /// UTF-8 text; form feeds (`\x0C`) separate pages.
    PlainText,
}

impl DocumentFormat {
    /// Format implied by a file extension, if it is one we read.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "txt" | "text" | "md" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    /// Extension first, then the `%PDF-` magic header, then plain text.
    pub fn detect(path: &Path, payload: &[u8]) -> Self {
        Self::from_path(path).unwrap_or_else(|| {
            if looks_like_pdf(payload) {
                DocumentFormat::Pdf
            } else {
                DocumentFormat::PlainText
            }
        })
    }
}

/// Best-effort sniff for PDF bytes (magic header).
pub fn looks_like_pdf(payload: &[u8]) -> bool {
    payload.starts_with(b"%PDF-")
}

/// Extract the text of a PDF payload.
///
/// Fails only if the payload cannot be opened as a PDF at all; otherwise
/// returns the joined page texts, possibly empty.
pub fn extract_text(payload: &[u8]) -> Result<String> {
    extract_with_format(payload, DocumentFormat::Pdf)
}

/// Extract the text of a payload in a known format.
pub fn extract_with_format(payload: &[u8], format: DocumentFormat) -> Result<String> {
    let text = match format {
        DocumentFormat::Pdf => join_pages(&PdfDocument::load(payload)?),
        DocumentFormat::PlainText => join_pages(&PlainTextDocument::parse(payload)?),
    };
    tracing::trace!(?format, bytes = payload.len(), chars = text.len(), "extracted text");
    Ok(text)
}
