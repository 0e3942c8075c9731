// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the resrank CLI.
//!
//! The ranked table is a box with one row per candidate: rank, file name,
//! score with two decimals, and a bar proportional to the score. Colors follow
//! the terminal theme (OneDark or One Light) and disappear under `NO_COLOR` or
//! when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `RESRANK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use resrank::{collapse_whitespace, RankedCandidate, ScreeningReport};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Columns inside a table row
const RANK_WIDTH: usize = 4;
const NAME_WIDTH: usize = 40;
const SCORE_WIDTH: usize = 6;
const BAR_WIDTH: usize = 24;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Pick a theme from the override and the terminal's fg;bg hint.
fn theme_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and 9-15 are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("RESRANK_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    theme_from(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Named colors resolved against the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Red) => (224, 108, 117),   // #e06c75
            (Theme::Dark, Color::Green) => (152, 195, 121), // #98c379
            (Theme::Dark, Color::Yellow) => (229, 192, 123), // #e5c07b
            (Theme::Dark, Color::Cyan) => (86, 182, 194),   // #56b6c2
            (Theme::Dark, Color::Gray) => (92, 99, 112),    // #5c6370
            (Theme::Light, Color::Red) => (228, 86, 73),    // #e45649
            (Theme::Light, Color::Green) => (80, 161, 79),  // #50a14f
            (Theme::Light, Color::Yellow) => (193, 132, 1), // #c18401
            (Theme::Light, Color::Cyan) => (1, 132, 188),   // #0184bc
            (Theme::Light, Color::Gray) => (160, 161, 167), // #a0a1a7
        }
    }

    fn code(self) -> String {
        rgb(self.rgb(theme()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, empty when colors are off
fn border() -> String {
    if use_colors() {
        Color::Gray.code()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Truncate to at most `max_chars` characters, ending in "…" when cut.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!(
        "{b}│{r}{content}{pad}{b}│{r}",
        b = border(),
        r = reset(),
        content = content,
        pad = " ".repeat(pad)
    )
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let colored_label = themed(Color::Cyan, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{b}┌{r}{label}{b}{line}┐{r}",
        b = border(),
        r = reset(),
        label = label_part,
        line = "─".repeat(remaining)
    )
}

/// Section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) -> String {
    let colored_label = themed(Color::Cyan, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{b}├{r}{label}{b}{line}┤{r}",
        b = border(),
        r = reset(),
        label = label_part,
        line = "─".repeat(remaining)
    )
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    format!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color for a score: green for strong matches, yellow for partial, gray for weak
fn score_color(score: f64) -> Color {
    if score >= 0.5 {
        Color::Green
    } else if score >= 0.2 {
        Color::Yellow
    } else {
        Color::Gray
    }
}

/// Score with two decimals, colored by strength
pub fn score_value(score: f64) -> String {
    themed(score_color(score), &[], &format!("{:>width$.2}", score, width = SCORE_WIDTH))
}

/// Horizontal bar proportional to a score in [0, 1]
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    themed(score_color(score), &[], &bar)
}

fn candidate_row(rank: usize, candidate: &RankedCandidate) -> String {
    let content = format!(
        " {} {} {}  {} ",
        pad_left(&format!("{}.", rank), RANK_WIDTH),
        pad_right(&truncate_label(&candidate.id, NAME_WIDTH), NAME_WIDTH),
        score_value(candidate.score),
        score_bar(candidate.score, BAR_WIDTH)
    );
    row(&content)
}

/// Lines of the ranked table, ready to print.
///
/// `limit == 0` shows every candidate above `min_score`.
pub fn report_lines(report: &ScreeningReport, limit: usize, min_score: f64) -> Vec<String> {
    let shown: Vec<&RankedCandidate> = report
        .ranked
        .iter()
        .filter(|c| c.score >= min_score)
        .take(if limit == 0 { usize::MAX } else { limit })
        .collect();

    let mut lines = vec![section_top("RANKED RESUMES")];
    if shown.is_empty() {
        lines.push(row(&themed(Color::Gray, &[], " no candidates above the threshold")));
    }
    for (i, candidate) in shown.iter().enumerate() {
        lines.push(candidate_row(i + 1, candidate));
    }

    let hidden = report.ranked.len() - shown.len();
    if hidden > 0 {
        lines.push(row(&themed(
            Color::Gray,
            &[],
            &format!(" … {} more not shown", hidden),
        )));
    }

    if !report.skipped.is_empty() {
        lines.push(section_mid("SKIPPED"));
        for skipped in &report.skipped {
            let content = format!(
                " {} {}",
                themed(Color::Red, &[BOLD], &truncate_label(&skipped.id, 24)),
                truncate_label(&collapse_whitespace(&skipped.reason), BOX_WIDTH - 27)
            );
            lines.push(row(&content));
        }
    }

    lines.push(section_bot());
    lines
}

/// Print the ranked table to stdout.
pub fn print_report(report: &ScreeningReport, limit: usize, min_score: f64) {
    for line in report_lines(report, limit, min_score) {
        println!("{}", line);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use resrank::SkippedDocument;

    fn sample_report() -> ScreeningReport {
        ScreeningReport {
            ranked: vec![
                RankedCandidate {
                    id: "alice.pdf".to_string(),
                    score: 0.82,
                    position: 1,
                },
                RankedCandidate {
                    id: "bob.pdf".to_string(),
                    score: 0.1,
                    position: 0,
                },
            ],
            skipped: vec![SkippedDocument {
                id: "scan.pdf".to_string(),
                reason: "unreadable document: not a valid PDF".to_string(),
            }],
        }
    }

    #[test]
    fn test_visible_len_with_escapes() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len("\x1b[32mhello\x1b[0m"), 5);
    }

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb((255, 128, 64)), "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn test_theme_from_override_and_hint() {
        assert_eq!(theme_from(Some("light"), None), Theme::Light);
        assert_eq!(theme_from(Some("DARK"), Some("0;15")), Theme::Dark);
        assert_eq!(theme_from(None, Some("0;15")), Theme::Light);
        assert_eq!(theme_from(None, Some("15;0")), Theme::Dark);
        assert_eq!(theme_from(Some("bogus"), None), Theme::Dark);
    }

    #[test]
    fn test_truncate_label_counts_chars() {
        assert_eq!(truncate_label("short.pdf", 20), "short.pdf");
        assert_eq!(truncate_label("résumé-final-v2.pdf", 8), "résumé-…");
    }

    #[test]
    fn test_score_bar_width_is_fixed() {
        for score in [0.0, 0.33, 0.5, 1.0, 1.7] {
            assert_eq!(visible_len(&score_bar(score, 10)), 10);
        }
    }

    #[test]
    fn test_rows_fill_box_width() {
        for line in report_lines(&sample_report(), 0, 0.0) {
            assert_eq!(visible_len(&line), BOX_WIDTH + 2, "bad width: {}", line);
        }
    }

    #[test]
    fn test_report_lines_limit_and_threshold() {
        let lines = report_lines(&sample_report(), 1, 0.0);
        assert!(lines.iter().any(|l| l.contains("alice.pdf")));
        assert!(!lines.iter().any(|l| l.contains("bob.pdf")));
        assert!(lines.iter().any(|l| l.contains("1 more not shown")));

        let lines = report_lines(&sample_report(), 0, 0.9);
        assert!(lines.iter().any(|l| l.contains("no candidates above the threshold")));
    }

    #[test]
    fn test_report_lines_list_skipped() {
        let lines = report_lines(&sample_report(), 0, 0.0);
        assert!(lines.iter().any(|l| l.contains("scan.pdf")));
    }
}
