// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolving input paths into documents to screen.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::extract::{extract_with_format, DocumentFormat};

/// A document on disk, labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Display label: the file name.
    pub id: String,
    pub path: PathBuf,
}

impl SourceDocument {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { id, path }
    }
}

/// Where the job description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// Text given directly.
    Text(String),
    /// A document to extract, PDF or plain text.
    File(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> RankError + '_ {
    move |source| RankError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Expand input paths into source documents.
///
/// Explicit files are kept in the order given whatever their extension.
/// Directories contribute their supported files (PDF, plain text), sorted by
/// file name; subdirectories are not descended into.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    let mut sources = Vec::new();

    for path in paths {
        let metadata = fs::metadata(path).map_err(io_error(path))?;
        if !metadata.is_dir() {
            sources.push(SourceDocument::from_path(path));
            continue;
        }

        let mut found: Vec<PathBuf> = fs::read_dir(path)
            .map_err(io_error(path))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && DocumentFormat::from_path(p).is_some())
            .collect();
        found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        tracing::debug!(dir = %path.display(), files = found.len(), "collected directory");
        sources.extend(found.into_iter().map(SourceDocument::from_path));
    }

    Ok(sources)
}

/// Read a file and extract its text, picking the format from the extension
/// or the file's magic bytes.
pub fn extract_file(path: &Path) -> Result<String> {
    let payload = fs::read(path).map_err(io_error(path))?;
    let format = DocumentFormat::detect(path, &payload);
    extract_with_format(&payload, format)
}

/// Resolve the job description to query text.
pub fn load_query(source: &JobSource) -> Result<String> {
    match source {
        JobSource::Text(text) => Ok(text.trim().to_string()),
        JobSource::File(path) => extract_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pdf_with_text;

    #[test]
    fn test_source_id_is_file_name() {
        let source = SourceDocument::from_path("resumes/alice.pdf");
        assert_eq!(source.id, "alice.pdf");
        assert_eq!(source.path, PathBuf::from("resumes/alice.pdf"));
    }

    #[test]
    fn test_collect_inputs_sorts_directory_and_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();
        fs::write(dir.path().join("a.txt"), b"").unwrap();
        fs::write(dir.path().join("photo.png"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let sources = collect_inputs(&[dir.path().to_path_buf()]).unwrap();
        let ids: Vec<&str> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "b.pdf"]);
    }

    #[test]
    fn test_collect_inputs_keeps_explicit_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let z = dir.path().join("z.bin");
        let a = dir.path().join("a.pdf");
        fs::write(&z, b"").unwrap();
        fs::write(&a, b"").unwrap();

        let sources = collect_inputs(&[z, a]).unwrap();
        let ids: Vec<&str> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["z.bin", "a.pdf"]);
    }

    #[test]
    fn test_collect_inputs_missing_path() {
        let err = collect_inputs(&[PathBuf::from("/no/such/resumes")]).unwrap_err();
        assert!(matches!(err, RankError::Io { .. }));
    }

    #[test]
    fn test_load_query_from_text_and_pdf() {
        assert_eq!(
            load_query(&JobSource::Text("  rust engineer \n".to_string())).unwrap(),
            "rust engineer"
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.pdf");
        fs::write(&path, pdf_with_text("Senior Rust Engineer")).unwrap();
        assert_eq!(
            load_query(&JobSource::File(path)).unwrap(),
            "Senior Rust Engineer"
        );
    }

    #[test]
    fn test_extract_file_sniffs_pdf_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload");
        fs::write(&path, pdf_with_text("sniffed")).unwrap();
        assert_eq!(extract_file(&path).unwrap(), "sniffed");
    }
}
