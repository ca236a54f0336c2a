//! Main solver API
//!
//! The `Solver` ties a configuration to the two puzzles. It reads an input
//! (string or file), parses it completely, and returns an [`Answer`]. Any
//! malformed token aborts the run; there are no partial results.

use crate::config::SolverConfig;
use crate::dial::{count_passcode, parse_commands};
use crate::ids::{parse_ranges, sum_invalid_ids};
use crate::types::{Answer, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The puzzles this library can solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Puzzle {
    /// Dial rotations, answer is a passcode
    Dial,
    /// ID ranges, answer is the sum of invalid IDs
    InvalidIds,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Puzzle::Dial => write!(f, "dial"),
            Puzzle::InvalidIds => write!(f, "invalid-ids"),
        }
    }
}

/// Entry point for solving puzzle inputs
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the default (authoritative) rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the dial puzzle for whitespace-separated `L<n>`/`R<n>` commands
    ///
    /// # Example
    /// ```
    /// use aoc_puzzles::{Answer, Solver};
    ///
    /// // R50 stops on zero, R150 then passes it once more
    /// let answer = Solver::new().solve_dial("R50 R150").unwrap();
    /// assert_eq!(answer, Answer::Passcode(2));
    /// ```
    pub fn solve_dial(&self, input: &str) -> Result<Answer> {
        let commands = parse_commands(input)?;
        log::debug!(
            "Parsed {} rotation commands ({:?})",
            commands.len(),
            self.config.dial.method
        );
        let passcode = count_passcode(&commands, &self.config.dial)?;
        Ok(Answer::Passcode(passcode))
    }

    /// Solve the invalid-ID puzzle for comma-separated `start-end` ranges
    ///
    /// # Example
    /// ```
    /// use aoc_puzzles::{Answer, Solver};
    ///
    /// let answer = Solver::new().solve_invalid_ids("11-99,2323-2323\n").unwrap();
    /// assert_eq!(answer, Answer::InvalidIdSum(495 + 2323));
    /// ```
    pub fn solve_invalid_ids(&self, input: &str) -> Result<Answer> {
        let ranges = parse_ranges(input)?;
        log::debug!(
            "Parsed {} ID ranges ({:?})",
            ranges.len(),
            self.config.ids.rule
        );
        Ok(Answer::InvalidIdSum(sum_invalid_ids(&ranges, &self.config.ids)))
    }

    /// Solve `puzzle` for an input already held in memory
    pub fn solve(&self, puzzle: Puzzle, input: &str) -> Result<Answer> {
        match puzzle {
            Puzzle::Dial => self.solve_dial(input),
            Puzzle::InvalidIds => self.solve_invalid_ids(input),
        }
    }

    /// Read a whole input file and solve `puzzle` for it
    ///
    /// # Example
    /// ```no_run
    /// use aoc_puzzles::{Puzzle, Solver};
    /// use std::path::Path;
    ///
    /// let answer = Solver::new().solve_file(Puzzle::Dial, Path::new("input.txt")).unwrap();
    /// println!("{}", answer);
    /// ```
    pub fn solve_file(&self, puzzle: Puzzle, path: &Path) -> Result<Answer> {
        log::info!("Solving {} puzzle from {:?}", puzzle, path);
        let input = std::fs::read_to_string(path)?;
        let answer = self.solve(puzzle, &input)?;
        log::info!("{:?}: {}", path, answer);
        Ok(answer)
    }
}
