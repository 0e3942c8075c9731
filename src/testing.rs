// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It builds small in-memory PDFs so tests never depend on fixture files.

#![doc(hidden)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// What to put on one page of a generated PDF.
#[derive(Debug, Clone, Copy)]
pub enum PageSpec<'a> {
    /// Text drawn with a standard font. Each `\n`-separated line becomes its
    /// own text object. ASCII only.
    Text(&'a str),
    /// A filled rectangle and no text operators, like a scanned page.
    ImageOnly,
    /// Text drawn with a font dictionary that has no `/Type /Font` entry,
    /// as some broken producers emit. `lopdf` asserts on it in debug builds.
    UntypedFont(&'a str),
}

fn text_operations(text: &str) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let y = 720 - 16 * line_no as i64;
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(line)]),
            Operation::new("ET", vec![]),
        ]);
    }
    operations
}

fn image_only_operations() -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new("g", vec![0.into()]),
        Operation::new("re", vec![72.into(), 400.into(), 300.into(), 300.into()]),
        Operation::new("f", vec![]),
        Operation::new("Q", vec![]),
    ]
}

/// Build a PDF whose pages follow `pages`, in order.
pub fn pdf_from_pages(pages: &[PageSpec<'_>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for spec in pages {
        let (operations, page_resources) = match spec {
            PageSpec::Text(text) => (text_operations(text), resources_id),
            PageSpec::ImageOnly => (image_only_operations(), resources_id),
            PageSpec::UntypedFont(text) => {
                let untyped_font = doc.add_object(dictionary! {
                    "Subtype" => "Type1",
                    "BaseFont" => "Helvetica",
                    "Encoding" => "WinAnsiEncoding",
                });
                let untyped_resources = doc.add_object(dictionary! {
                    "Font" => dictionary! {
                        "F1" => untyped_font,
                    },
                });
                (text_operations(text), untyped_resources)
            }
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode test content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => page_resources,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize test PDF");
    bytes
}

/// Single-page PDF containing `text`.
pub fn pdf_with_text(text: &str) -> Vec<u8> {
    pdf_from_pages(&[PageSpec::Text(text)])
}
