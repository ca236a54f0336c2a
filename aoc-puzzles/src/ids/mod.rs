//! Invalid-ID range summer
//!
//! Reads comma-separated `start-end` ranges and sums the IDs inside them whose
//! decimal digits are one block repeated. The sums are computed in closed
//! form per digit width (see [`pattern`]), so range size does not matter.

use crate::config::{IdConfig, RepeatRule};
use crate::types::{Result, SolverError};
use std::fmt;
use std::str::FromStr;

pub mod pattern;

pub use pattern::{is_invalid_id, sum_doubled_ids, sum_repeated_ids};

/// Inclusive range of IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl IdRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start > end {
            return Err(SolverError::range(
                &format!("{}-{}", start, end),
                "start is greater than end",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, id: u64) -> bool {
        self.start <= id && id <= self.end
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_bound(token: &str, digits: &str) -> Result<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SolverError::range(
            token,
            format!("{:?} is not a non-negative integer", digits),
        ));
    }
    digits
        .parse::<u64>()
        .map_err(|e| SolverError::range(token, e.to_string()))
}

impl FromStr for IdRange {
    type Err = SolverError;

    fn from_str(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let (start, end) = trimmed
            .split_once('-')
            .ok_or_else(|| SolverError::range(token, "expected <start>-<end>"))?;

        let start = parse_bound(token, start)?;
        let end = parse_bound(token, end)?;
        if start > end {
            return Err(SolverError::range(token, "start is greater than end"));
        }
        Ok(Self { start, end })
    }
}

/// Parse a comma-separated list of ranges
///
/// Whitespace around tokens (including a trailing newline) is ignored. An
/// input that is entirely blank yields no ranges; an empty token between
/// commas is an error.
pub fn parse_ranges(input: &str) -> Result<Vec<IdRange>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(IdRange::from_str).collect()
}

/// Coalesce overlapping or touching ranges into a sorted, disjoint list
pub fn merge_ranges(mut ranges: Vec<IdRange>) -> Vec<IdRange> {
    ranges.sort_unstable();

    let mut merged: Vec<IdRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Sum the invalid IDs of every range under the configured rule
///
/// Without `merge_overlaps`, an ID inside two ranges is counted twice.
pub fn sum_invalid_ids(ranges: &[IdRange], config: &IdConfig) -> u128 {
    let merged;
    let ranges = if config.merge_overlaps {
        merged = merge_ranges(ranges.to_vec());
        log::debug!("Merged {} ranges into {}", ranges.len(), merged.len());
        &merged[..]
    } else {
        ranges
    };

    ranges
        .iter()
        .map(|range| {
            let sum = match config.rule {
                RepeatRule::Twice => sum_doubled_ids(range),
                RepeatRule::AtLeastTwice => sum_repeated_ids(range),
            };
            log::debug!("Range {}: invalid ID sum {}", range, sum);
            sum
        })
        .sum()
}
