// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resrank::screen::{collect_inputs, extract_file, load_query, screen_with_progress};
use resrank::{JobSource, RankerConfig, ScreeningReport};

mod cli;
use cli::{display, Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for the table or JSON.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("RESRANK_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Rank {
            job,
            job_text,
            resumes,
            limit,
            min_score,
            format,
            config,
        } => {
            let job = match (job, job_text) {
                (Some(path), _) => JobSource::File(path),
                (None, Some(text)) => JobSource::Text(text),
                (None, None) => bail!("a job description is required (--job or --job-text)"),
            };
            run_rank(&job, &resumes, limit, min_score, format, config)
        }
        Commands::Extract { file } => {
            let text = extract_file(&file)
                .with_context(|| format!("failed to extract {}", file.display()))?;
            println!("{}", text);
            Ok(())
        }
    }
}

fn run_rank(
    job: &JobSource,
    resumes: &[PathBuf],
    limit: usize,
    min_score: f64,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => RankerConfig::from_file(&path)?,
        None => RankerConfig::default(),
    };

    let query = load_query(job).context("failed to load job description")?;
    if query.is_empty() {
        tracing::warn!("job description has no text; every candidate will score 0.00");
    }

    let sources = collect_inputs(resumes).context("failed to collect resumes")?;
    tracing::info!(resumes = sources.len(), "screening resumes");

    let report = screen_with_progress(&query, &sources, &config).context("ranking failed")?;

    match format {
        OutputFormat::Table => display::print_report(&report, limit, min_score),
        OutputFormat::Json => {
            let trimmed = trim_report(report, limit, min_score);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &trimmed)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Apply the score threshold and limit to an already sorted report.
fn trim_report(mut report: ScreeningReport, limit: usize, min_score: f64) -> ScreeningReport {
    report.ranked.retain(|c| c.score >= min_score);
    if limit > 0 {
        report.ranked.truncate(limit);
    }
    report
}
