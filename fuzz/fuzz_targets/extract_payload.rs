// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for document extraction.
//!
//! Uploaded resumes are untrusted bytes. Whatever arrives, extraction either
//! returns text or `UnreadableDocument`, and the text obeys the page policy.
//!
//! Panics inside the PDF parser are caught by the extractor and turned into
//! failed pages or unreadable documents. libfuzzer-sys installs a hook that
//! aborts on every panic, caught or not, so the default hook is restored once;
//! a panic that escapes `extract_with_format` still aborts the run.

#![no_main]

use std::panic;
use std::sync::Once;

use libfuzzer_sys::fuzz_target;
use resrank::{extract_with_format, DocumentFormat, RankError};

static RESTORE_HOOK: Once = Once::new();

fuzz_target!(|payload: &[u8]| {
    RESTORE_HOOK.call_once(|| drop(panic::take_hook()));

    for format in [DocumentFormat::Pdf, DocumentFormat::PlainText] {
        match extract_with_format(payload, format) {
            Ok(text) => {
                // Pages are trimmed before joining
                assert_eq!(text.trim(), text, "extracted text not trimmed");
            }
            Err(RankError::UnreadableDocument { .. }) => {}
            Err(other) => panic!("unexpected error kind: {:?}", other),
        }
    }
});
