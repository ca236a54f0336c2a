//! Core types for the puzzle library
//!
//! This module defines the error taxonomy and the answer type every solver
//! produces. Solvers are pure functions of their input; the only state they
//! keep is the accumulator for the run in progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors that can occur while reading or solving a puzzle input
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid rotation command {token:?}: {reason}")]
    InvalidCommand { token: String, reason: String },

    #[error("Invalid ID range {token:?}: {reason}")]
    InvalidRange { token: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SolverError {
    pub(crate) fn command(token: &str, reason: impl Into<String>) -> Self {
        SolverError::InvalidCommand {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn range(token: &str, reason: impl Into<String>) -> Self {
        SolverError::InvalidRange {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Final result of a solver run
///
/// `Display` renders the single output line the puzzle expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Number of zero-crossings counted by the dial tracker
    Passcode(u128),
    /// Sum of all invalid IDs across the input ranges
    InvalidIdSum(u128),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Passcode(v) => write!(f, "Passcode: {}", v),
            Answer::InvalidIdSum(v) => write!(f, "Sum of invalid IDs: {}", v),
        }
    }
}
