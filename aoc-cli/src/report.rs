//! Answer rendering
//!
//! Text output is the bare answer line (`Passcode: 6`), prefixed with the
//! input path when several inputs are solved in one run. JSON output is one
//! object per input.

use crate::config::OutputFormat;
use anyhow::Result;
use aoc_puzzles::{Answer, Puzzle};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a Path,
    puzzle: Puzzle,
    answer: &'a Answer,
}

/// Render one solved input as a single output line
pub fn render(
    format: OutputFormat,
    puzzle: Puzzle,
    input: &Path,
    answer: &Answer,
    show_input: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text if show_input => Ok(format!("{}: {}", input.display(), answer)),
        OutputFormat::Text => Ok(answer.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Report {
            input,
            puzzle,
            answer,
        })?),
    }
}
