// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the resrank command-line interface.
//!
//! Two subcommands: `rank` to score resumes against a job description, and
//! `extract` to see exactly what text the ranker would get from a document.

pub mod display;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "resrank",
    about = "Rank resumes against a job description with TF-IDF",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RESRANK_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for ranking results
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table with score bars
    Table,
    /// JSON report on stdout
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes by relevance to a job description
    #[command(group(ArgGroup::new("job_input").required(true).args(["job", "job_text"])))]
    Rank {
        /// Job description file (PDF or plain text)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Resume files or directories containing them
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Maximum number of candidates to show (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Hide candidates scoring below this value
        #[arg(long, default_value = "0.0")]
        min_score: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// JSON file with vectorizer settings
        ///
        /// Fields: minTokenChars, stripAccents, smoothIdf, sublinearTf.
        /// Missing fields keep their defaults.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the text extracted from a document
    Extract {
        /// Path to a PDF or plain-text file
        file: PathBuf,
    },
}
