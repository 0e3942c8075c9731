//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical PDF builders from resrank::testing
pub use resrank::testing::{pdf_from_pages, pdf_with_text, PageSpec};

/// Scores within this distance are considered equal.
pub const EPSILON: f64 = 1e-12;

pub const JOB_PYTHON: &str = "python developer with django experience";

/// Candidate resumes for the python/django job, best match first.
pub const RESUMES: &[(&str, &str)] = &[
    (
        "priya.pdf",
        "Senior Python developer. Six years building Django and Flask services, \
         PostgreSQL, Celery, REST APIs.",
    ),
    (
        "marco.pdf",
        "Full stack developer. JavaScript, React, some Python scripting.",
    ),
    (
        "lena.pdf",
        "Java backend engineer. Spring Boot, Kafka, Kubernetes.",
    ),
];

/// Assert two scores are equal up to rounding.
pub fn assert_score_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected score {}, got {}",
        expected,
        actual
    );
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write fixture");
    path
}

/// Write every resume in [`RESUMES`] as a PDF into `dir`.
pub fn write_resume_pdfs(dir: &Path) -> Vec<PathBuf> {
    RESUMES
        .iter()
        .map(|(name, text)| write_file(dir, name, &pdf_with_text(text)))
        .collect()
}
